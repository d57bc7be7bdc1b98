use skynium_web::app::{BootError, CONFIG_GLOBAL};
use skynium_web::logging::format_line;
use skynium_web::wire::is_activation_key;

#[test]
fn enter_and_space_activate_toggles() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Spacebar"));
    assert!(!is_activation_key("enter"));
}

#[test]
fn console_lines_carry_their_target() {
    assert_eq!(
        format_line("skynium_a11y::store", "preferences saved"),
        "[skynium_a11y::store] preferences saved"
    );
}

#[test]
fn boot_errors_read_cleanly() {
    assert_eq!(
        BootError::AlreadyBooted.to_string(),
        "accessibility panel already initialized"
    );
    assert_eq!(BootError::NotHtml.to_string(), "document is not an HTML document");
    let wrapped: anyhow::Error = BootError::NoDocument.into();
    assert_eq!(format!("{wrapped:#}"), "document unavailable");
}

#[test]
fn config_global_name_is_stable() {
    assert_eq!(CONFIG_GLOBAL, "skyniumA11yConfig");
}
