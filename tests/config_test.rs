//! Loading configuration from disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tictactoe_timeline::{DEFAULT_INFO_IMAGE_URL, GameConfig, GameMode, Orchestrator};

#[test]
fn test_load_partial_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "opponent_delay_ms = 250").expect("write");
    writeln!(file, "log_file = \"game.log\"").expect("write");

    let config = GameConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config.opponent_delay(), Duration::from_millis(250));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.info_image_url(), DEFAULT_INFO_IMAGE_URL);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GameConfig::load(Some(Path::new("/nonexistent/tictactoe.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_image_url_reaches_snapshot_unchanged() {
    let config = GameConfig::from_toml("info_image_url = \"https://example.com/board.png\"")
        .expect("valid config");
    let mut game = Orchestrator::new(&config);
    game.select_mode(GameMode::PlayerVsPlayer);
    assert_eq!(game.snapshot().image_url(), "https://example.com/board.png");
}
