//! Field validation and mapping
//!
//! Turns an untyped inbound form payload into a fully-formed [`LeadRecord`],
//! or a validation error. Validation is presence-based: a field set to `""`
//! or `0` still counts as present. No partial records are ever produced.

use leadbridge_domain::{LeadBridgeError, LeadRecord, Result};
use serde_json::{Map, Value};

use super::profile::FormProfile;

/// Validate `body` against `profile` and build the outbound CRM record.
///
/// Fails with the first missing required field in the profile's order. List
/// fields are validated only when their key is present: a present empty list
/// and a present non-list value are two distinct errors, while an absent key
/// silently maps to an empty string. That asymmetry is deliberate; see the
/// tests.
pub fn map_fields(body: Option<&Value>, profile: FormProfile) -> Result<LeadRecord> {
    let fields = match body {
        Some(Value::Object(map)) => map,
        _ => {
            return Err(LeadBridgeError::Validation("Missing required request body".to_string()))
        }
    };

    for field in profile.required_fields() {
        if !fields.contains_key(*field) {
            return Err(LeadBridgeError::Validation(format!("Missing required field: {field}")));
        }
    }

    // Required fields are known present from here on.
    let mut record = LeadRecord::new(
        required_scalar(fields, "email"),
        required_scalar(fields, "phone"),
        required_scalar(fields, "firstname"),
        required_scalar(fields, "lastname"),
        required_scalar(fields, "business_name"),
    );

    record.street = optional_scalar(fields, "address1");
    record.city = optional_scalar(fields, "city");
    record.country = optional_scalar(fields, "country");
    record.postal_code = optional_scalar(fields, "zip_code");
    record.state = optional_scalar(fields, "state");

    for list_field in profile.list_fields() {
        let joined = join_list(fields, list_field.source)?;
        (list_field.assign)(&mut record, joined);
    }

    Ok(record)
}

/// Render a known-present scalar as a string. Non-string scalars (numbers,
/// booleans) are rendered rather than rejected; presence is what was
/// validated.
fn required_scalar(fields: &Map<String, Value>, key: &str) -> String {
    fields.get(key).map(scalar_string).unwrap_or_default()
}

/// Optional scalars keep legacy falsy semantics: absent, `null`, `false`,
/// `0`, and `""` all collapse to the empty string.
fn optional_scalar(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Join a list field's elements with semicolons, without a trailing
/// delimiter. Absent key yields an empty string; a present key must hold a
/// non-empty array.
fn join_list(fields: &Map<String, Value>, key: &str) -> Result<String> {
    let Some(value) = fields.get(key) else {
        return Ok(String::new());
    };

    let items = value.as_array().ok_or_else(|| {
        LeadBridgeError::Validation(format!("Field '{key}' must be a list"))
    })?;

    if items.is_empty() {
        return Err(LeadBridgeError::Validation(format!("Field '{key}' must be a non-empty list")));
    }

    Ok(items.iter().map(scalar_string).collect::<Vec<_>>().join(";"))
}
