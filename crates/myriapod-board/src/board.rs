//! GameBoard: the mushroom field with collision queries and counters.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use myriapod_core::enums::{Direction, TileState};
use myriapod_core::types::Cell;

/// The mushroom field: a row-major grid of destructible tiles plus the
/// bookkeeping the spawn rules read.
///
/// Counters are maintained incrementally on every mutation, so density
/// queries are O(1) inside the per-frame spawn checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameBoard {
    width: i32,
    height: i32,
    player_area_height: i32,
    /// Row-major tiles (row 0 = top of the board).
    tiles: Vec<TileState>,
    mushrooms_total: u32,
    mushrooms_in_player_area: u32,
}

impl GameBoard {
    /// Create an empty board.
    pub fn new(width: i32, height: i32, player_area_height: i32) -> Self {
        Self {
            width,
            height,
            player_area_height,
            tiles: vec![TileState::Empty; (width * height) as usize],
            mushrooms_total: 0,
            mushrooms_in_player_area: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn player_area_height(&self) -> i32 {
        self.player_area_height
    }

    /// Row index of the top of the player region.
    pub fn player_area_top(&self) -> i32 {
        self.height - self.player_area_height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Mushrooms anywhere on the field.
    pub fn mushrooms_total(&self) -> u32 {
        self.mushrooms_total
    }

    /// Mushrooms within the player's rows.
    pub fn mushrooms_in_player_area(&self) -> u32 {
        self.mushrooms_in_player_area
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some((cell.y * self.width + cell.x) as usize)
        } else {
            None
        }
    }

    /// Tile contents at `cell`; `Empty` outside the board.
    pub fn tile(&self, cell: Cell) -> TileState {
        self.index(cell).map_or(TileState::Empty, |i| self.tiles[i])
    }

    /// Collision query at `cell`. The destructive variant removes the
    /// mushroom (either kind) on a hit and updates the counters.
    pub fn check_collision(&mut self, cell: Cell, destructive: bool) -> TileState {
        let Some(i) = self.index(cell) else {
            return TileState::Empty;
        };
        let hit = self.tiles[i];
        if destructive && hit != TileState::Empty {
            self.tiles[i] = TileState::Empty;
            self.count_removed(cell);
        }
        hit
    }

    /// Place a plain mushroom at `cell`. No-op outside the board or on an
    /// occupied tile.
    pub fn create_mushroom(&mut self, cell: Cell) {
        let Some(i) = self.index(cell) else { return };
        if self.tiles[i] != TileState::Empty {
            return;
        }
        self.tiles[i] = TileState::Mushroom;
        self.count_added(cell);
    }

    /// Remove whatever mushroom is at `cell`, if any.
    pub fn destroy_mushroom(&mut self, cell: Cell) {
        let Some(i) = self.index(cell) else { return };
        if self.tiles[i] == TileState::Empty {
            return;
        }
        self.tiles[i] = TileState::Empty;
        self.count_removed(cell);
    }

    /// Convert a plain mushroom at `cell` into the poisoned variant.
    /// No-op on empty or already-poisoned tiles.
    pub fn poison_mushroom(&mut self, cell: Cell) {
        let Some(i) = self.index(cell) else { return };
        if self.tiles[i] == TileState::Mushroom {
            self.tiles[i] = TileState::PoisonMushroom;
        }
    }

    /// Whether the player may step from `from` towards `direction`: the
    /// target must stay inside the player band and be free of mushrooms.
    pub fn player_allowed_to_move(&self, from: Cell, direction: Direction) -> bool {
        let target = from + direction.delta();
        if target.x < 0 || target.x >= self.width {
            return false;
        }
        if target.y < self.player_area_top() || target.y >= self.height {
            return false;
        }
        self.tile(target) == TileState::Empty
    }

    /// Scatter `count` mushrooms over the rows above the player band.
    /// The top and bottom rows of that span are left clear so entities
    /// always have a way in.
    pub fn scatter_mushrooms(&mut self, rng: &mut ChaCha8Rng, count: u32) {
        let top = 1;
        let bottom = self.player_area_top();
        if bottom <= top {
            return;
        }
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < count * 20 {
            attempts += 1;
            let cell = Cell::new(rng.gen_range(0..self.width), rng.gen_range(top..bottom));
            if self.tile(cell) == TileState::Empty {
                self.create_mushroom(cell);
                placed += 1;
            }
        }
    }

    /// Occupied tiles, for the snapshot.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = (Cell, TileState)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(i, &state)| {
            if state == TileState::Empty {
                None
            } else {
                let cell = Cell::new(i as i32 % self.width, i as i32 / self.width);
                Some((cell, state))
            }
        })
    }

    fn count_added(&mut self, cell: Cell) {
        self.mushrooms_total += 1;
        if cell.y >= self.player_area_top() {
            self.mushrooms_in_player_area += 1;
        }
    }

    fn count_removed(&mut self, cell: Cell) {
        self.mushrooms_total -= 1;
        if cell.y >= self.player_area_top() {
            self.mushrooms_in_player_area -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myriapod_core::types::cell;
    use rand::SeedableRng;

    /// 10 wide, 8 tall, 3 player rows (player band = rows 5..8).
    fn make_test_board() -> GameBoard {
        GameBoard::new(10, 8, 3)
    }

    #[test]
    fn test_non_destructive_query_leaves_mushroom() {
        let mut board = make_test_board();
        board.create_mushroom(cell(4, 2));
        assert_eq!(board.check_collision(cell(4, 2), false), TileState::Mushroom);
        assert_eq!(board.tile(cell(4, 2)), TileState::Mushroom);
        assert_eq!(board.mushrooms_total(), 1);
    }

    #[test]
    fn test_destructive_query_removes_mushroom() {
        let mut board = make_test_board();
        board.create_mushroom(cell(4, 2));
        assert_eq!(board.check_collision(cell(4, 2), true), TileState::Mushroom);
        assert_eq!(board.tile(cell(4, 2)), TileState::Empty);
        assert_eq!(board.mushrooms_total(), 0);
    }

    #[test]
    fn test_destructive_query_reports_poisoned_variant() {
        let mut board = make_test_board();
        board.create_mushroom(cell(3, 3));
        board.poison_mushroom(cell(3, 3));
        assert_eq!(
            board.check_collision(cell(3, 3), true),
            TileState::PoisonMushroom
        );
        assert_eq!(board.tile(cell(3, 3)), TileState::Empty);
    }

    #[test]
    fn test_query_outside_board_is_empty() {
        let mut board = make_test_board();
        assert_eq!(board.check_collision(cell(-1, 0), true), TileState::Empty);
        assert_eq!(board.check_collision(cell(0, 99), true), TileState::Empty);
    }

    #[test]
    fn test_create_does_not_overwrite() {
        let mut board = make_test_board();
        board.create_mushroom(cell(2, 2));
        board.poison_mushroom(cell(2, 2));
        board.create_mushroom(cell(2, 2));
        assert_eq!(board.tile(cell(2, 2)), TileState::PoisonMushroom);
        assert_eq!(board.mushrooms_total(), 1);
    }

    #[test]
    fn test_poison_requires_plain_mushroom() {
        let mut board = make_test_board();
        board.poison_mushroom(cell(5, 5));
        assert_eq!(board.tile(cell(5, 5)), TileState::Empty);
    }

    #[test]
    fn test_player_area_counter() {
        let mut board = make_test_board();
        board.create_mushroom(cell(0, 4)); // above the band
        board.create_mushroom(cell(0, 5)); // top band row
        board.create_mushroom(cell(0, 7)); // bottom row
        assert_eq!(board.mushrooms_total(), 3);
        assert_eq!(board.mushrooms_in_player_area(), 2);

        board.destroy_mushroom(cell(0, 5));
        assert_eq!(board.mushrooms_total(), 2);
        assert_eq!(board.mushrooms_in_player_area(), 1);
    }

    #[test]
    fn test_player_movement_confined_to_band() {
        let board = make_test_board();
        // Top band row is 5; moving up from it would leave the band.
        assert!(!board.player_allowed_to_move(cell(4, 5), Direction::Up));
        assert!(board.player_allowed_to_move(cell(4, 6), Direction::Up));
        // Bottom row: down is off the board.
        assert!(!board.player_allowed_to_move(cell(4, 7), Direction::Down));
        // Side edges.
        assert!(!board.player_allowed_to_move(cell(0, 6), Direction::Left));
        assert!(!board.player_allowed_to_move(cell(9, 6), Direction::Right));
    }

    #[test]
    fn test_player_blocked_by_mushroom() {
        let mut board = make_test_board();
        board.create_mushroom(cell(5, 6));
        assert!(!board.player_allowed_to_move(cell(4, 6), Direction::Right));
        assert!(board.player_allowed_to_move(cell(4, 6), Direction::Down));
    }

    #[test]
    fn test_scatter_avoids_player_band() {
        let mut board = make_test_board();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        board.scatter_mushrooms(&mut rng, 12);
        assert_eq!(board.mushrooms_total(), 12);
        assert_eq!(board.mushrooms_in_player_area(), 0);
        for (cell, _) in board.occupied_tiles() {
            assert!(cell.y >= 1 && cell.y < board.player_area_top());
        }
    }

    #[test]
    fn test_occupied_tiles_roundtrip() {
        let mut board = make_test_board();
        board.create_mushroom(cell(1, 1));
        board.create_mushroom(cell(9, 4));
        board.poison_mushroom(cell(9, 4));
        let tiles: Vec<_> = board.occupied_tiles().collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.contains(&(cell(1, 1), TileState::Mushroom)));
        assert!(tiles.contains(&(cell(9, 4), TileState::PoisonMushroom)));
    }
}
