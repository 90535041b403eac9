use todopad::config::LoggingConfig;
use todopad::logger::{init_file_logging, Logger};

#[test]
fn test_logger_keeps_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_logger_counts_errors() {
    let logger = Logger::new();
    logger.log("info entry".to_string());
    logger.error("broken entry".to_string());

    assert_eq!(logger.error_count(), 1);
    logger.clear();
    assert!(logger.get_logs().is_empty());
    assert_eq!(logger.error_count(), 0);
}

#[test]
fn test_logger_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.error("shared".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_file_logging_disabled() {
    let config = LoggingConfig::default();
    assert!(init_file_logging(&config).unwrap().is_none());
}

#[test]
fn test_level_filter_parsing() {
    let mut config = LoggingConfig::default();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    config.level = "trace".to_string();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Trace);
    config.level = "nope".to_string();
    assert!(config.level_filter().is_err());
}

#[test]
fn test_error_count_ignores_info_text_mentioning_error() {
    let logger = Logger::new();
    logger.log("] ERROR in the message text".to_string());
    logger.log("ERROR".to_string());

    assert_eq!(logger.error_count(), 0);
    assert_eq!(logger.get_logs().len(), 2);
}
