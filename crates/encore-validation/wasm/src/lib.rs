//! Encore Validation WASM
//!
//! WebAssembly bindings for the rule-chain engine.
//! The browser binder calls these on blur, input and submit, so client-side
//! checks run the same code as everything else.

use encore_validation_core as core;
use encore_validation_core::{FileInfo, FileRules, PasswordStrength, RuleChain};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Evaluate a rule declaration against a value
///
/// # Arguments
/// * `value` - The field's current value (trimmed here)
/// * `rules` - Declaration from the field's `data-validate` attribute
/// * `fields` - Object of other fields' live values by id, for `match` rules
///
/// # Returns
/// `{ valid, message }`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateRules(input.value, input.dataset.validate, {
///     password: document.getElementById('password').value,
/// });
/// ```
#[wasm_bindgen(js_name = validateRules)]
pub fn validate_rules(value: &str, rules: &str, fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: HashMap<String, String> = if fields.is_undefined() || fields.is_null() {
        HashMap::new()
    } else {
        serde_wasm_bindgen::from_value(fields)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?
    };

    let chain = RuleChain::parse(rules);
    let result = core::evaluate_chain(value.trim(), &chain, &fields);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Check a selected file against upload limits
///
/// `file` is `{ name, size, mimeType }`; `rules` is optional
/// `{ max_size, allowed_types, allowed_extensions }` and falls back to the
/// defaults (10MB, image/audio/video types).
#[wasm_bindgen(js_name = validateFile)]
pub fn validate_file(file: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let file: FileInfo = serde_wasm_bindgen::from_value(file)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse file: {}", e)))?;

    let rules: FileRules = if rules.is_undefined() || rules.is_null() {
        FileRules::default()
    } else {
        serde_wasm_bindgen::from_value(rules)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse file rules: {}", e)))?
    };

    Ok(serde_wasm_bindgen::to_value(&core::validate_file(&file, &rules))?)
}

/// Parse a declaration into `[{ name, params }]`
#[wasm_bindgen(js_name = parseRules)]
pub fn parse_rules(rules: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&RuleChain::parse(rules))?)
}

/// Report malformed rule parameters once, when a field is bound.
///
/// Each problem is written to the console as a warning and returned as a
/// list of messages, empty when the declaration is clean.
#[wasm_bindgen(js_name = lintRules)]
pub fn lint_rules(rules: &str) -> Vec<String> {
    let problems: Vec<String> = lint_messages(rules);
    for problem in &problems {
        web_sys::console::warn_1(&JsValue::from_str(&format!("encore-validation: {}", problem)));
    }
    problems
}

fn lint_messages(rules: &str) -> Vec<String> {
    RuleChain::parse(rules)
        .lint()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::email::is_valid_email(email)
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(url: &str) -> bool {
    core::string::is_valid_url(url)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    core::string::is_valid_phone(phone)
}

/// Password check for strength meters; returns the failure message, if any.
/// Unknown tiers fall back to medium.
#[wasm_bindgen(js_name = checkPassword)]
pub fn check_password_js(password: &str, strength: &str) -> Option<String> {
    let strength = PasswordStrength::parse(strength).unwrap_or_default();
    core::password::validate_password(password, strength).err()
}
