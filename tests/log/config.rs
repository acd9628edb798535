use chainlog::log::{
    default_level_colors, Color, ConfigError, LogFormatConfig, DEFAULT_DATE_FORMAT, SIMPLE_FORMAT,
};

#[test]
fn default_is_simple_preset() {
    let config = LogFormatConfig::default();

    assert_eq!(config, LogFormatConfig::simple());
    assert_eq!(config.format, SIMPLE_FORMAT);
    assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    assert!(config.level_color);
    assert_eq!(config.level_colors, default_level_colors());
}

#[test]
fn default_level_colors_cover_three_levels() {
    let colors = default_level_colors();
    assert_eq!(colors.len(), 3);
    assert_eq!(colors["error"], Color::Red);
    assert_eq!(colors["info"], Color::Blue);
    assert_eq!(colors["debug"], Color::Yellow);
}

#[test]
fn builder_methods_override_fields() {
    let config = LogFormatConfig::formatted("[log]")
        .with_format("[level] [log]")
        .with_date_format("%H:%M")
        .with_level_color("error", Color::Magenta)
        .level_color(false);

    assert_eq!(config.format, "[level] [log]");
    assert_eq!(config.date_format, "%H:%M");
    assert_eq!(config.level_colors["error"], Color::Magenta);
    assert!(!config.level_color);
}

#[test]
fn validate_rejects_unknown_specifiers() {
    let err = LogFormatConfig::simple().with_date_format("%Y-%!").validate().unwrap_err();

    assert!(matches!(err.base(), Some(ConfigError::InvalidDateFormat(p)) if p == "%Y-%!"));
    assert_eq!(err.stack()[0].location(), Some("LogFormatConfig::validate"));
}

#[test]
fn validate_rejects_parse_only_specifiers() {
    let err = LogFormatConfig::simple().with_date_format("%H:%M %#z").validate().unwrap_err();

    assert!(matches!(err.base(), Some(ConfigError::InvalidDateFormat(p)) if p == "%H:%M %#z"));
    assert_eq!(err.depth(), 1);
}

#[test]
fn validate_accepts_literal_patterns() {
    assert!(LogFormatConfig::simple().with_date_format("2023-02-02 15:15:15").validate().is_ok());
}

#[test]
fn from_json_fills_missing_fields_from_preset() {
    let config = LogFormatConfig::from_json(r#"{"format":"[level]: [log]","level_colors":{"warn":"magenta"}}"#)
        .unwrap();

    assert_eq!(config.format, "[level]: [log]");
    assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    assert!(config.level_color);
    assert_eq!(config.level_colors.len(), 1);
    assert_eq!(config.level_colors["warn"], Color::Magenta);
}

#[test]
fn from_json_reports_bad_documents() {
    let err = LogFormatConfig::from_json(r#"{"level_colors":{"error":"purple"}}"#).unwrap_err();
    assert!(matches!(err.base(), Some(ConfigError::Json(_))));
    assert_eq!(err.stack()[0].message(), "could not decode log format config");

    let err = LogFormatConfig::from_json(r#"{"date_format":"%!"}"#).unwrap_err();
    assert!(matches!(err.base(), Some(ConfigError::InvalidDateFormat(_))));
}
