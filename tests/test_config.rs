use sky_defender::config::*;
use sky_defender::entities::SpawnMode;

#[test]
fn defaults_match_the_arcade_values() {
    let config = GameConfig::default();
    assert_eq!(config.max_shots, 2);
    assert_eq!(config.alien_odds, 22);
    assert_eq!(config.bomb_odds, 60);
    assert_eq!(config.alien_reload, 12);
    assert_eq!(config.frame_rate, 40);
    assert_eq!(config.bomb_floor, 470);
    assert_eq!(config.default_mode, SpawnMode::Enemy);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_toml_is_the_default() {
    let config = GameConfig::from_toml_str("").expect("empty file parses");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let config = GameConfig::from_toml_str(
        r#"
        alien_odds = 10
        default_mode = "hazard"
        seed = 1234
        "#,
    )
    .expect("valid config");
    assert_eq!(config.alien_odds, 10);
    assert_eq!(config.default_mode, SpawnMode::Hazard);
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.bomb_odds, BOMB_ODDS);
    assert_eq!(config.max_shots, MAX_SHOTS);
}

#[test]
fn zero_odds_are_rejected() {
    let err = GameConfig::from_toml_str("alien_odds = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "alien_odds", .. }));

    let err = GameConfig::from_toml_str("bomb_odds = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "bomb_odds", .. }));
}

#[test]
fn other_invalid_values_are_rejected() {
    for (toml, field) in [
        ("frame_rate = 0", "frame_rate"),
        ("max_shots = 0", "max_shots"),
        ("player_bounce = 0", "player_bounce"),
    ] {
        match GameConfig::from_toml_str(toml) {
            Err(ConfigError::Invalid { field: got, .. }) => assert_eq!(got, field),
            other => panic!("{toml}: expected Invalid, got {other:?}"),
        }
    }
}

#[test]
fn unknown_mode_is_a_parse_error() {
    let err = GameConfig::from_toml_str(r#"default_mode = "submarine""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load("/definitely/not/here/sky_defender.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_reads_a_file() {
    let path = std::env::temp_dir().join(format!("sky_defender_{}.toml", std::process::id()));
    std::fs::write(&path, "frame_rate = 60\ndefault_mode = \"aircraft\"\n").expect("write temp config");
    let config = GameConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    let config = config.expect("valid file");
    assert_eq!(config.frame_rate, 60);
    assert_eq!(config.default_mode, SpawnMode::Aircraft);
}

#[test]
fn error_messages_name_the_field() {
    let err = GameConfig::from_toml_str("bomb_odds = 0").unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for `bomb_odds`: must be at least 1");
}
