use crate::models::ContactForm;

/// Decode a request body into a form. An absent body is `{}`; a present
/// but empty body is malformed JSON.
pub fn parse_body(body: Option<&[u8]>) -> Result<ContactForm, String> {
    match body {
        None => Ok(ContactForm::default()),
        Some(bytes) => serde_json::from_slice(bytes).map_err(|e| format!("Invalid JSON: {e}")),
    }
}
