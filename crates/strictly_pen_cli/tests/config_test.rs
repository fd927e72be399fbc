//! Tests for loading game configuration files.

use std::io::Write;
use strictly_pen::{BoardErrorKind, PlayerSpec, Point, Rgb};
use strictly_pen_cli::{ConfigOverrides, GameConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_loads() {
    let file = write_config(
        r#"
width = 4
height = 3
wall_density = 0.0
seed = 7
anchor = { x = 1, y = 1 }
walls = [{ x = 3, y = 2 }]

[[players]]
name = "Shuri"
color = [0, 100, 0]

[[players]]
name = "Okoye"
color = [200, 0, 0]

[[players]]
name = "Nakia"
color = [0, 0, 200]
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.width(), 4);
    assert_eq!(*config.height(), 3);
    assert_eq!(*config.anchor(), Some(Point::new(1, 1)));
    assert_eq!(config.walls(), &vec![Point::new(3, 2)]);
    assert_eq!(config.players()[0], PlayerSpec::new("Shuri", Rgb(0, 100, 0)));

    let board = config.board_settings().build().unwrap();
    assert_eq!(board.anchor(), Point::new(1, 1));
    assert!(board.node_at(Point::new(3, 2)).unwrap().is_wall());
    assert_eq!(board.players().len(), 3);
    assert_eq!(board.current_player_spec().name, "Shuri");
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config("width = 5\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.width(), 5);
    assert_eq!(*config.height(), 8);
    assert_eq!(config.players(), &PlayerSpec::defaults());
    assert_eq!(*config.anchor(), None);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_no_path_means_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_flags_override_file() {
    let file = write_config("width = 5\nheight = 5\nseed = 1\n");

    let config = GameConfig::from_file(file.path()).unwrap().with_overrides(ConfigOverrides {
        height: Some(2),
        wall_density: Some(0.0),
        seed: Some(42),
        ..ConfigOverrides::default()
    });

    assert_eq!(*config.width(), 5);
    assert_eq!(*config.height(), 2);
    assert_eq!(*config.wall_density(), 0.0);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_invalid_board_surfaces_configuration_error() {
    let file = write_config("width = 0\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    let err = config.board_settings().build().unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::ZeroSize(0, 8)));
}

#[test]
fn test_empty_player_list_rejected() {
    let file = write_config("players = []\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    let err = config.board_settings().build().unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::NoPlayers));
}
