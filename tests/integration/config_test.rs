use wattmon::{TrackerConfig, WattmonError};

#[test]
fn test_config_defaults() {
    let config = TrackerConfig::default();
    assert_eq!(config.watt_rate_per_minute, 1.0);
    assert_eq!(config.price_per_watt_hour, 0.1);
}

#[test]
fn test_get_returns_current_pair() {
    let config = TrackerConfig::new(3.0, 0.25);
    assert_eq!(config.get(), (3.0, 0.25));
}

#[test]
fn test_save_valid_input_replaces_both_values() {
    let mut config = TrackerConfig::default();
    config.save("2.5", "0.2").unwrap();
    assert_eq!(config.get(), (2.5, 0.2));
}

#[test]
fn test_save_invalid_watt_text_signals_error_and_preserves_config() {
    let mut config = TrackerConfig::default();

    let err = config.save("abc", "0.2").unwrap_err();
    assert!(matches!(err, WattmonError::InvalidNumericInput(_)));
    assert_eq!(config.get(), (1.0, 0.1));
}

#[test]
fn test_save_invalid_price_text_leaves_watt_rate_untouched() {
    // Both fields parse before either value is written
    let mut config = TrackerConfig::new(2.0, 0.3);
    assert!(config.save("4.0", "4,5").is_err());
    assert_eq!(config.get(), (2.0, 0.3));
}

#[test]
fn test_save_accepts_integer_and_scientific_notation() {
    let mut config = TrackerConfig::default();
    config.save("5", "1e-3").unwrap();
    assert_eq!(config.get(), (5.0, 0.001));
}

#[test]
fn test_save_rejects_empty_and_whitespace_fields() {
    let mut config = TrackerConfig::default();
    assert!(config.save("", "0.2").is_err());
    assert!(config.save("2.0", "   ").is_err());
    assert_eq!(config.get(), (1.0, 0.1));
}

#[test]
fn test_save_rejects_non_finite_values() {
    let mut config = TrackerConfig::default();
    assert!(config.save("inf", "0.1").is_err());
    assert!(config.save("1.0", "-inf").is_err());
    assert!(config.save("NaN", "0.1").is_err());
    assert_eq!(config.get(), (1.0, 0.1));
}

#[test]
fn test_error_message_is_user_facing() {
    let mut config = TrackerConfig::default();
    let err = config.save("watts", "0.1").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("watts"));
    assert!(message.to_lowercase().contains("numeric"));
}
