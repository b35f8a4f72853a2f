//! Unit tests for domain error types

use slice_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("injector 'app'");
    assert!(error.is_not_found());
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "injector 'app'"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_already_exists_error() {
    let error = Error::already_exists("injector 'app'");
    assert!(!error.is_not_found());
    assert_eq!(format!("{}", error), "Already exists: injector 'app'");
}

#[test]
fn test_cycle_error_display_includes_chain() {
    let error = Error::cycle(
        "name repeated",
        vec!["a".to_string(), "b".to_string(), "a".to_string()],
    );
    let display_str = format!("{}", error);
    assert!(display_str.contains("name repeated"));
    assert!(display_str.contains("a -> b -> a"));
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Invalid input provided");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Invalid input provided"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_injection_error() {
    let error = Error::injection("no repository bound for 'app'");
    assert_eq!(
        format!("{error}"),
        "Injection error: no repository bound for 'app'"
    );
    assert!(std::error::Error::source(&error).is_none());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing required config");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing required config");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let error: Error = io_error.into();
    match error {
        Error::Io { message, source } => {
            assert!(message.contains("file missing"));
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}
