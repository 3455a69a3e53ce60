//! Tests for TOML configuration loading.

use morpion::MorpionConfig;
use morpion_engine::{Color, EngineError, Player, default_players};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = MorpionConfig::default();
    assert_eq!(*config.board_size(), 3);
    assert_eq!(config.players(), &default_players());

    let game = config.build_game().unwrap();
    assert_eq!(game.size(), 3);
    assert_eq!(game.current_player().label(), "X");
}

#[test]
fn test_parse_full_config() {
    let config = MorpionConfig::from_toml(
        r#"
board_size = 4

[[players]]
label = "A"
color = "Red"

[[players]]
label = "B"
color = "cyan"

[[players]]
label = "C"
color = "yellow"
"#,
    )
    .unwrap();

    assert_eq!(*config.board_size(), 4);
    assert_eq!(
        config.players(),
        &vec![
            Player::new("A", Color::Red),
            Player::new("B", Color::Cyan),
            Player::new("C", Color::Yellow),
        ]
    );
    assert_eq!(config.build_game().unwrap().winning_combinations().len(), 10);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = MorpionConfig::from_toml("board_size = 5").unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(config.players(), &default_players());
}

#[test]
fn test_unknown_color_rejected() {
    let result = MorpionConfig::from_toml(
        r#"
[[players]]
label = "X"
color = "chartreuse"
"#,
    );
    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_single_player_fails_at_build() {
    let config = MorpionConfig::from_toml(
        r#"
[[players]]
label = "X"
color = "blue"
"#,
    )
    .unwrap();

    assert_eq!(
        config.build_game().unwrap_err(),
        EngineError::TooFewPlayers { count: 1 }
    );
}

#[test]
fn test_size_override() {
    let config = MorpionConfig::default().with_board_size(5);
    assert_eq!(config.build_game().unwrap().size(), 5);

    let config = MorpionConfig::default().with_board_size(0);
    assert_eq!(
        config.build_game().unwrap_err(),
        EngineError::InvalidSize { size: 0 }
    );
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 6").unwrap();

    let config = MorpionConfig::load(file.path()).unwrap();
    assert_eq!(*config.board_size(), 6);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = MorpionConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, MorpionConfig::default());
}

#[test]
fn test_unreadable_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file.
    let err = MorpionConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
    assert!(err.to_string().starts_with("Config error:"));
}
