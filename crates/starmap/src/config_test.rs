use approx::assert_relative_eq;

use crate::config::StarmapConfig;
use crate::error::ConfigError;

#[test]
fn test_empty_document_is_default() {
    let config = StarmapConfig::from_toml_str("").unwrap();
    assert_eq!(config, StarmapConfig::default());
    assert_relative_eq!(config.catalog.bubble_radius_ly, 50.0);
    assert_eq!(config.catalog.cache_capacity, 100);
    assert_relative_eq!(config.navigation.transition_duration_ms, 1000.0);
    assert_relative_eq!(config.navigation.frame_quantum_ms, 16.0);
}

#[test]
fn test_partial_sections() {
    let config = StarmapConfig::from_toml_str(
        r#"
        [catalog]
        bubble_radius_ly = 20.0
        cache_capacity = 8

        [navigation]
        target_scale = 6.0
        "#,
    )
    .unwrap();

    assert_relative_eq!(config.catalog.bubble_radius_ly, 20.0);
    assert_eq!(config.catalog.cache_capacity, 8);
    assert_relative_eq!(config.catalog.generated_shell_depth_ly, 50.0);
    assert_relative_eq!(config.navigation.target_scale, 6.0);
    assert_relative_eq!(config.navigation.screen_width, 1280.0);
}

#[test]
fn test_invalid_values() {
    let zero_capacity = "[catalog]\ncache_capacity = 0\n";
    assert!(matches!(
        StarmapConfig::from_toml_str(zero_capacity),
        Err(ConfigError::Invalid(_))
    ));

    let negative_radius = "[catalog]\nbubble_radius_ly = -5.0\n";
    assert!(matches!(
        StarmapConfig::from_toml_str(negative_radius),
        Err(ConfigError::Invalid(_))
    ));

    let zero_duration = "[navigation]\ntransition_duration_ms = 0.0\n";
    match StarmapConfig::from_toml_str(zero_duration) {
        Err(ConfigError::Invalid(message)) => {
            assert!(message.contains("transition_duration_ms"));
        }
        other => panic!("expected invalid duration, got {:?}", other),
    }
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        StarmapConfig::from_toml_str("[catalog\nbubble_radius_ly = "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        StarmapConfig::from_toml_str("[catalog]\nbubble_radius_ly = \"far\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_toml_round_trip() {
    let mut config = StarmapConfig::default();
    config.catalog.cache_capacity = 12;
    config.navigation.target_scale = 3.5;

    let text = config.to_toml_string().unwrap();
    assert_eq!(StarmapConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        StarmapConfig::load("/nonexistent/starmap.toml"),
        Err(ConfigError::Io { .. })
    ));
}
