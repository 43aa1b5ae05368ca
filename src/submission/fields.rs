use serde_json::Value;

use crate::models::{ContactForm, ValidatedForm};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, email, message.";

/// All three fields must be present and truthy. The error lists the
/// offending field names for logging; callers only ever see the fixed message.
pub fn validate(form: ContactForm) -> Result<ValidatedForm, Vec<&'static str>> {
    let name = truthy_text(form.name);
    let email = truthy_text(form.email);
    let message = truthy_text(form.message);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ValidatedForm {
            name,
            email,
            message,
        }),
        (name, email, message) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("name");
            }
            if email.is_none() {
                missing.push("email");
            }
            if message.is_none() {
                missing.push("message");
            }
            Err(missing)
        }
    }
}

/// `null`, `""`, `false`, zero, `[]` and `{}` count as missing. Other
/// non-string values are kept as their compact JSON text.
fn truthy_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}
