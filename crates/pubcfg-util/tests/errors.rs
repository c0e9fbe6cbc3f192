use pubcfg_util::errors::PublishingError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = PublishingError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = PublishingError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad syntax");
}

#[test]
fn test_config_incomplete_error_display() {
    let err = PublishingError::ConfigIncomplete {
        message: "version is not set".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration incomplete: version is not set"
    );
}

#[test]
fn test_generic_error_display() {
    let err = PublishingError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_config_error_carries_help() {
    use miette::Diagnostic;

    let err = PublishingError::Config {
        message: "x".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("Publishing.toml"), "got: {help}");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: PublishingError = io_err.into();
    assert!(matches!(err, PublishingError::Io(_)));
}
