//! Tests for engine configuration loading.

use std::io::Write;
use strictly_minimax::{Board, Difficulty, Engine, EngineConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    assert_eq!(*config.medium_depth(), 3);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
default_difficulty = "medium"
medium_depth = 4
seed = 42
"#,
    );
    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.default_difficulty(), Difficulty::Medium);
    assert_eq!(*config.medium_depth(), 4);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("seed = 1\n");
    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config, EngineConfig::default().with_seed(1));
}

#[test]
fn test_zero_medium_depth_rejected() {
    let file = write_config("medium_depth = 0\n");
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("medium_depth"));
}

#[test]
fn test_bad_difficulty_rejected() {
    let file = write_config("default_difficulty = \"impossible\"\n");
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file() {
    let err = EngineConfig::from_file("/nonexistent/strictly_minimax.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_seeded_engines_agree_on_easy_moves() {
    let config = EngineConfig::default().with_seed(9);
    let board = Board::new();
    let mut a = Engine::new(&config).unwrap();
    let mut b = Engine::new(&config).unwrap();
    for _ in 0..10 {
        assert_eq!(
            a.choose(&board, Difficulty::Easy),
            b.choose(&board, Difficulty::Easy)
        );
    }
}
