use cio_logger::{LogLevel, MessageLevel};

#[test]
fn none_threshold_admits_nothing() {
    assert!(!LogLevel::None.should_log(MessageLevel::Error));
    assert!(!LogLevel::None.should_log(MessageLevel::Info));
    assert!(!LogLevel::None.should_log(MessageLevel::Debug));
}

#[test]
fn error_threshold_admits_errors_only() {
    assert!(LogLevel::Error.should_log(MessageLevel::Error));
    assert!(!LogLevel::Error.should_log(MessageLevel::Info));
    assert!(!LogLevel::Error.should_log(MessageLevel::Debug));
}

#[test]
fn info_threshold_admits_errors_and_info() {
    assert!(LogLevel::Info.should_log(MessageLevel::Error));
    assert!(LogLevel::Info.should_log(MessageLevel::Info));
    assert!(!LogLevel::Info.should_log(MessageLevel::Debug));
}

#[test]
fn debug_threshold_admits_everything() {
    assert!(LogLevel::Debug.should_log(MessageLevel::Error));
    assert!(LogLevel::Debug.should_log(MessageLevel::Info));
    assert!(LogLevel::Debug.should_log(MessageLevel::Debug));
}

#[test]
fn full_policy_table() {
    let table = [
        (LogLevel::None, [false, false, false]),
        (LogLevel::Error, [true, false, false]),
        (LogLevel::Info, [true, true, false]),
        (LogLevel::Debug, [true, true, true]),
    ];
    let messages = [MessageLevel::Error, MessageLevel::Info, MessageLevel::Debug];

    for (configured, expected) in table {
        for (message, want) in messages.iter().zip(expected) {
            assert_eq!(
                configured.should_log(*message),
                want,
                "configured={configured:?} message={message:?}"
            );
        }
    }
}
