use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = PlayConfig::from_toml_str("").unwrap();
    assert_eq!(config, PlayConfig::default());
    assert!(config.rules.track_rook_moves);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn test_partial_file() {
    let config = PlayConfig::from_toml_str(
        r#"
unicode = true

[rules]
track_rook_moves = false
"#,
    )
    .unwrap();
    assert!(config.unicode);
    assert!(config.show_coordinates, "untouched field keeps its default");
    assert_eq!(config.rules, RulesConfig::king_moved_only());
}

#[test]
fn test_bad_value_is_a_parse_error() {
    let err = PlayConfig::from_toml_str("unicode = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = PlayConfig::load(Path::new("/nonexistent/chess_play.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/chess_play.toml"));
}

#[test]
fn test_sample_config_matches_defaults() {
    let config = PlayConfig::from_toml_str(include_str!("../chess_play.toml")).unwrap();
    assert_eq!(config, PlayConfig::default());
}
