use ghub_logger::{Logger, LoggerError};

#[test]
fn second_install_reports_existing_subscriber() {
    let _log = Logger::builder().name("ghub-first").init().expect("first install");

    let err = Logger::builder().name("ghub-second").init().expect_err("subscriber is taken");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    // A blank name is rejected before any subscriber work happens.
    let err = Logger::builder().name("   ").init().expect_err("blank name");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
