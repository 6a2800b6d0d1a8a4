//! Structural validation of raw configuration documents.
//!
//! The walker checks the whole document in one pass and collects every
//! violation it finds, so the aggregated diagnostic is complete instead of
//! stopping at the first problem. Unknown keys are rejected at every level
//! except inside `locales`, whose keys are free-form locale codes.

use serde_json::{Map, Value};

use crate::error::{ConfigValidationError, Violation};

const TOP_LEVEL_KEYS: &[&str] = &["extract", "resolve", "locales"];
const EXTRACT_KEYS: &[&str] = &["output", "headers"];
const HEADER_KEYS: &[&str] = &["content-type", "plural-forms"];
const RESOLVE_KEYS: &[&str] = &["locale"];

/// Validate a raw document against the configuration schema.
///
/// Pure function of its input; returns the aggregated diagnostic on failure.
pub fn validate_document(document: &Value) -> Result<(), ConfigValidationError> {
    let mut violations = Vec::new();
    check_document(document, &mut violations);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigValidationError { violations })
    }
}

fn check_document(document: &Value, violations: &mut Vec<Violation>) {
    let Some(object) = document.as_object() else {
        violations.push(Violation::new("", "must be an object"));
        return;
    };

    reject_unknown_keys(object, TOP_LEVEL_KEYS, "", violations);
    if let Some(extract) = object.get("extract") {
        check_extract(extract, violations);
    }
    if let Some(resolve) = object.get("resolve") {
        check_resolve(resolve, violations);
    }
    if let Some(locales) = object.get("locales") {
        check_locales(locales, violations);
    }
}

fn check_extract(extract: &Value, violations: &mut Vec<Violation>) {
    // An explicitly null extract section is tolerated and treated as absent.
    if extract.is_null() {
        return;
    }
    let Some(object) = extract.as_object() else {
        violations.push(Violation::new("/extract", "must be an object"));
        return;
    };

    reject_unknown_keys(object, EXTRACT_KEYS, "/extract", violations);
    if let Some(output) = object.get("output") {
        if !output.is_string() {
            violations.push(Violation::new("/extract/output", "must be a string"));
        }
    }
    if let Some(headers) = object.get("headers") {
        check_headers(headers, violations);
    }
}

fn check_headers(headers: &Value, violations: &mut Vec<Violation>) {
    let Some(object) = headers.as_object() else {
        violations.push(Violation::new("/extract/headers", "must be an object"));
        return;
    };

    reject_unknown_keys(object, HEADER_KEYS, "/extract/headers", violations);
    for key in HEADER_KEYS {
        if let Some(value) = object.get(*key) {
            if !value.is_string() {
                violations.push(Violation::new(
                    format!("/extract/headers/{}", key),
                    "must be a string",
                ));
            }
        }
    }
}

fn check_resolve(resolve: &Value, violations: &mut Vec<Violation>) {
    let Some(object) = resolve.as_object() else {
        violations.push(Violation::new("/resolve", "must be an object"));
        return;
    };

    reject_unknown_keys(object, RESOLVE_KEYS, "/resolve", violations);
    match object.get("locale") {
        Some(Value::String(locale)) if !locale.is_empty() => {}
        Some(_) => violations.push(Violation::new(
            "/resolve/locale",
            "must be a non-empty string",
        )),
        None => violations.push(Violation::new(
            "/resolve",
            "must have required property \"locale\"",
        )),
    }
}

fn check_locales(locales: &Value, violations: &mut Vec<Violation>) {
    let Some(object) = locales.as_object() else {
        violations.push(Violation::new("/locales", "must be an object"));
        return;
    };

    // Keys are free-form locale codes; only the mapped paths are constrained.
    for (code, path) in object {
        if !path.is_string() {
            violations.push(Violation::new(format!("/locales/{}", code), "must be a string"));
        }
    }
}

fn reject_unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    path: &str,
    violations: &mut Vec<Violation>,
) {
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            violations.push(Violation::new(
                path,
                format!("must not have additional property {:?}", key),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::error::Violation;
    use crate::schema::*;

    #[test]
    fn test_empty_document_is_valid() {
        assert!(validate_document(&json!({})).is_ok());
    }

    #[test]
    fn test_full_document_is_valid() {
        let document = json!({
            "extract": {
                "output": "./i18n/messages.pot",
                "headers": {
                    "content-type": "text/plain; charset=UTF-8",
                    "plural-forms": "nplurals=2; plural=(n != 1);"
                }
            },
            "resolve": { "locale": "fr" },
            "locales": { "fr": "/i18n/fr.po", "de": "/i18n/de.po" }
        });
        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn test_null_extract_section_is_tolerated() {
        assert!(validate_document(&json!({ "extract": null })).is_ok());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let err = validate_document(&json!(["extract"])).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("", "must be an object")]
        );

        assert!(validate_document(&json!(null)).is_err());
    }

    #[test]
    fn test_unknown_top_level_key_is_rejected() {
        let err = validate_document(&json!({ "extractt": {} })).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("", "must not have additional property \"extractt\"")]
        );
    }

    #[test]
    fn test_unknown_nested_keys_are_rejected() {
        let err = validate_document(&json!({
            "extract": { "outputs": "a.pot" },
            "resolve": { "locale": "fr", "region": "CA" }
        }))
        .unwrap_err();
        let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["/extract", "/resolve"]);
    }

    #[test]
    fn test_unknown_header_key_is_rejected() {
        let err = validate_document(&json!({
            "extract": { "headers": { "language": "fr" } }
        }))
        .unwrap_err();
        assert_eq!(err.violations[0].path, "/extract/headers");
    }

    #[test]
    fn test_resolve_requires_locale() {
        let err = validate_document(&json!({ "resolve": {} })).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("/resolve", "must have required property \"locale\"")]
        );
    }

    #[test]
    fn test_resolve_locale_must_be_non_empty_string() {
        assert!(validate_document(&json!({ "resolve": { "locale": "" } })).is_err());
        assert!(validate_document(&json!({ "resolve": { "locale": 7 } })).is_err());
        assert!(validate_document(&json!({ "resolve": null })).is_err());
    }

    #[test]
    fn test_locales_values_must_be_strings() {
        let err = validate_document(&json!({ "locales": { "fr": ["fr.po"] } })).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("/locales/fr", "must be a string")]
        );
    }

    #[test]
    fn test_every_violation_is_collected_in_one_pass() {
        let err = validate_document(&json!({
            "extract": { "output": 1, "headers": { "plural-forms": false } },
            "resolve": {},
            "locales": { "fr": null },
            "mode": "extract"
        }))
        .unwrap_err();
        let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&""));
        assert!(paths.contains(&"/extract/output"));
        assert!(paths.contains(&"/extract/headers/plural-forms"));
        assert!(paths.contains(&"/resolve"));
        assert!(paths.contains(&"/locales/fr"));
        assert_eq!(err.violations.len(), 5);
    }
}
