use std::collections::HashMap;

use figtag::core::config::EmbedSettings;
use figtag::errors::EmbedError;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let settings = EmbedSettings::default();
    assert_eq!(settings.image_dir, "");
    assert!(!settings.use_custom_path);
    assert_eq!(settings.custom_path, "./assets");
    assert_eq!(settings.image_width, "80%");
    assert!(!settings.include_alt);
}

#[test]
fn test_from_json_fills_missing_fields() {
    let settings = EmbedSettings::from_json(r#"{"image_width": "auto"}"#).unwrap();
    assert_eq!(settings.image_width, "auto");
    assert_eq!(settings.custom_path, "./assets");
}

#[test]
fn test_from_json_accepts_camel_case_keys() {
    let settings = EmbedSettings::from_json(
        r#"{"useCustomPath": true, "customPath": "assets", "includeAlt": true}"#,
    )
    .unwrap();
    assert!(settings.use_custom_path);
    assert_eq!(settings.custom_path, "assets");
    assert!(settings.include_alt);
}

#[test]
fn test_from_json_rejects_bad_input() {
    let err = EmbedSettings::from_json(r#"{"include_alt": "sometimes"}"#).unwrap_err();
    assert!(matches!(err, EmbedError::ParseError(_)));

    let err = EmbedSettings::from_json("not json").unwrap_err();
    assert!(matches!(err, EmbedError::ParseError(_)));
}

#[test]
fn test_from_lookup_reads_variables() {
    let settings = EmbedSettings::from_lookup(lookup_from(&[
        ("FIGTAG_IMAGE_DIR", "attachments"),
        ("FIGTAG_USE_CUSTOM_PATH", "Yes"),
        ("FIGTAG_CUSTOM_PATH", "../media"),
        ("FIGTAG_IMAGE_WIDTH", "100%"),
        ("FIGTAG_INCLUDE_ALT", "1"),
    ]))
    .unwrap();

    assert_eq!(
        settings,
        EmbedSettings {
            image_dir: "attachments".to_string(),
            use_custom_path: true,
            custom_path: "../media".to_string(),
            image_width: "100%".to_string(),
            include_alt: true,
        }
    );
}

#[test]
fn test_from_lookup_with_nothing_set_is_default() {
    let settings = EmbedSettings::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(settings, EmbedSettings::default());
}

#[test]
fn test_from_lookup_rejects_invalid_boolean() {
    let err =
        EmbedSettings::from_lookup(lookup_from(&[("FIGTAG_USE_CUSTOM_PATH", "perhaps")]))
            .unwrap_err();

    match err {
        EmbedError::ConfigError(msg) => {
            assert!(msg.contains("FIGTAG_USE_CUSTOM_PATH"), "Actual: {msg}");
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_markup_for_uses_settings() {
    let settings = EmbedSettings {
        image_dir: "assets".to_string(),
        use_custom_path: true,
        custom_path: "assets".to_string(),
        image_width: "80%".to_string(),
        include_alt: false,
    };

    let request = settings.request_for("image_1234567890.png");
    assert_eq!(request.image_path, "assets/image_1234567890.png");

    assert_eq!(
        settings.markup_for("image_1234567890.png"),
        "<center>\n  <img src=\"assets/image_1234567890.png\" width=\"80%\"><br>\n  <b>Figure</b>.image 1234567890.\n</center>"
    );
}
