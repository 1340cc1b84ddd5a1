use cio_logger::CioError;

#[test]
fn error_constructors() {
    assert!(matches!(CioError::config("x"), CioError::Config { .. }));
    assert!(matches!(CioError::io("x"), CioError::Io { .. }));
    assert!(matches!(CioError::storage("x"), CioError::Storage { .. }));
    assert!(matches!(
        CioError::validation("f", "m"),
        CioError::Validation { .. }
    ));
    assert!(matches!(CioError::generic("x"), CioError::Generic { .. }));
}

#[test]
fn display_messages() {
    let e = CioError::storage("no writable directory");
    assert_eq!(format!("{}", e), "Storage error: no writable directory");

    let e = CioError::generic("unexpected");
    assert_eq!(format!("{}", e), "Error: unexpected");

    let e = CioError::validation("level", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));
}

#[test]
fn io_errors_convert() {
    let io_err = std::io::Error::other("disk full");
    let e: CioError = io_err.into();
    assert!(matches!(e, CioError::Io { .. }));
    assert!(format!("{}", e).contains("disk full"));
}
