#[cfg(test)]
mod tests {
    use crate::commands::PlayerIntent;
    use crate::config::{ConfigError, GameConfig};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{cell, TickClock};

    /// Verify Direction deltas map to the screen layout (row 0 at the top).
    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), cell(0, -1));
        assert_eq!(Direction::Down.delta(), cell(0, 1));
        assert_eq!(Direction::Left.delta(), cell(-1, 0));
        assert_eq!(Direction::Right.delta(), cell(1, 0));
    }

    #[test]
    fn test_direction_reversed() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_ne!(dir, dir.reversed());
            assert_eq!(dir, dir.reversed().reversed());
        }
    }

    /// Verify the clock wraps the animation counter but never the tick.
    #[test]
    fn test_tick_clock_advance() {
        let mut clock = TickClock::default();
        for _ in 0..10 {
            clock.advance(4);
        }
        assert_eq!(clock.tick, 10);
        assert_eq!(clock.anim, 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_zero_denominator() {
        let mut config = GameConfig::default();
        config.spawn.flea_chance = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroField {
                field: "spawn.flea_chance"
            })
        );
    }

    #[test]
    fn test_config_rejects_zero_anim_cycle() {
        let config = GameConfig {
            anim_cycle: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroField {
                field: "anim_cycle"
            })
        );
    }

    #[test]
    fn test_config_rejects_oversized_player_area() {
        let config = GameConfig {
            board_height: 10,
            player_area_height: 10,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlayerAreaTooTall {
                player_area_height: 10,
                board_height: 10,
            })
        );
    }

    /// Verify a partial JSON config falls back to defaults for the rest.
    #[test]
    fn test_config_partial_deserialize() {
        let config: GameConfig =
            serde_json::from_str(r#"{"max_bullets": 6, "scores": {"spider": 900}}"#).unwrap();
        assert_eq!(config.max_bullets, 6);
        assert_eq!(config.scores.spider, 900);
        assert_eq!(config.scores.flea, GameConfig::default().scores.flea);
        assert_eq!(config.board_width, GameConfig::default().board_width);
    }

    /// Verify GameEvent round-trips through serde (tagged union).
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::TargetDestroyed {
                target: TargetKind::Spider,
                cell: cell(4, 27),
                points: 600,
            },
            GameEvent::FleaSpawned { column: 12 },
            GameEvent::SpiderSpawned { cell: cell(29, 26) },
            GameEvent::SnailSpawned { row: 8 },
            GameEvent::CentipedeRegenerated,
            GameEvent::CentipedeSplit { pieces: 2 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_player_intent_serde() {
        let intent = PlayerIntent {
            direction: Some(Direction::Left),
            firing: true,
        };
        let json = serde_json::to_string(&intent).unwrap();
        let back: PlayerIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent.direction, back.direction);
        assert_eq!(intent.firing, back.firing);
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time, back.time);
        assert!(back.sprites.is_empty());
    }
}
