use figtag::setup_logging;

#[test]
fn test_logging_setup() {
    // This test verifies that the logging setup function doesn't panic,
    // even when called more than once.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_rendering_with_logging_enabled() {
    setup_logging();
    let html = figtag::build_image_markup("a_b.png", "", "", false, "", "80%", false);
    assert!(html.contains("<b>Figure</b>.a b."));
}
