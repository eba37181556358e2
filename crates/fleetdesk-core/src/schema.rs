//! Request body validation for computer create/update payloads.
//!
//! Bodies arrive as raw JSON so every violation can be reported at once,
//! rather than stopping at the first field serde trips over.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{NewComputer, Status, UpdateComputer};

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("static regex is valid")
});

const STATUS_CHOICES: &str = "'online' | 'offline' | 'warning'";

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON key of the offending field; empty for the body itself.
    pub path: String,
    pub message: String,
}

/// Every constraint a payload violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation error: {}", render(.violations))]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// `<message> at "<path>"` per violation, joined with `; `.
fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| {
            if v.path.is_empty() {
                v.message.clone()
            } else {
                format!("{} at \"{}\"", v.message, v.path)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a create payload. Required: `name`, `processor`, `ram`,
/// `storage`, `ipAddress`. Optional: `remoteEnabled`, `remotePassword`,
/// `status`. Unknown keys, including `id`, are ignored.
pub fn validate_insert(body: &Value) -> Result<NewComputer, ValidationErrors> {
    let mut reader = FieldReader::new(body)?;

    let new = NewComputer {
        name: reader.required_string("name"),
        processor: reader.required_string("processor"),
        ram: reader.required_string("ram"),
        storage: reader.required_string("storage"),
        ip_address: reader.required_string("ipAddress"),
        remote_enabled: reader.boolean("remoteEnabled").unwrap_or(false),
        remote_password: reader.nullable_string("remotePassword").flatten(),
        status: reader.status("status").unwrap_or_default(),
    };
    reader.finish()?;
    Ok(new)
}

/// Validate an update payload: every field optional, type-checked when
/// present.
pub fn validate_update(body: &Value) -> Result<UpdateComputer, ValidationErrors> {
    let mut reader = FieldReader::new(body)?;

    let update = UpdateComputer {
        name: reader.string("name"),
        processor: reader.string("processor"),
        ram: reader.string("ram"),
        storage: reader.string("storage"),
        ip_address: reader.string("ipAddress"),
        remote_enabled: reader.boolean("remoteEnabled"),
        remote_password: reader.nullable_string("remotePassword"),
        status: reader.status("status"),
    };
    reader.finish()?;
    Ok(update)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> FieldReader<'a> {
    fn new(body: &'a Value) -> Result<Self, ValidationErrors> {
        match body {
            Value::Object(object) => Ok(Self {
                object,
                violations: Vec::new(),
            }),
            other => Err(ValidationErrors {
                violations: vec![Violation {
                    path: String::new(),
                    message: format!("Expected object, received {}", type_name(other)),
                }],
            }),
        }
    }

    fn violation(&mut self, key: &str, message: impl Into<String>) {
        self.violations.push(Violation {
            path: key.to_string(),
            message: message.into(),
        });
    }

    /// Missing or invalid values are recorded and replaced by an empty
    /// string, which `finish` never lets escape.
    fn required_string(&mut self, key: &str) -> String {
        if !self.object.contains_key(key) {
            self.violation(key, "Required");
            return String::new();
        }
        self.string(key).unwrap_or_default()
    }

    /// Absent → `None`. Present → must be a string passing the field rules.
    fn string(&mut self, key: &str) -> Option<String> {
        let object = self.object;
        match object.get(key)? {
            Value::String(s) => {
                if !self.check_rules(key, s) {
                    return None;
                }
                Some(s.clone())
            }
            other => {
                let message = format!("Expected string, received {}", type_name(other));
                self.violation(key, message);
                None
            }
        }
    }

    fn check_rules(&mut self, key: &str, value: &str) -> bool {
        match key {
            "name" if value.is_empty() => {
                self.violation(key, "String must contain at least 1 character(s)");
                false
            }
            "ipAddress" if !IPV4_RE.is_match(value) => {
                self.violation(key, "Invalid IP address format");
                false
            }
            _ => true,
        }
    }

    /// Absent → `None`, `null` → `Some(None)`, string → `Some(Some(..))`.
    fn nullable_string(&mut self, key: &str) -> Option<Option<String>> {
        let object = self.object;
        match object.get(key)? {
            Value::Null => Some(None),
            Value::String(s) => Some(Some(s.clone())),
            other => {
                let message = format!("Expected string, received {}", type_name(other));
                self.violation(key, message);
                None
            }
        }
    }

    fn boolean(&mut self, key: &str) -> Option<bool> {
        let object = self.object;
        match object.get(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                let message = format!("Expected boolean, received {}", type_name(other));
                self.violation(key, message);
                None
            }
        }
    }

    fn status(&mut self, key: &str) -> Option<Status> {
        let object = self.object;
        match object.get(key)? {
            Value::String(s) => {
                if let Ok(status) = s.parse() {
                    Some(status)
                } else {
                    let message =
                        format!("Invalid enum value. Expected {STATUS_CHOICES}, received '{s}'");
                    self.violation(key, message);
                    None
                }
            }
            other => {
                let message = format!("Expected {STATUS_CHOICES}, received {}", type_name(other));
                self.violation(key, message);
                None
            }
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "X",
            "processor": "P",
            "ram": "8GB",
            "storage": "1TB",
            "ipAddress": "10.0.0.1",
            "remoteEnabled": false,
            "status": "offline"
        })
    }

    #[test]
    fn insert_accepts_valid_body_and_applies_defaults() {
        let new = validate_insert(&json!({
            "name": "X",
            "processor": "P",
            "ram": "8GB",
            "storage": "1TB",
            "ipAddress": "10.0.0.1"
        }))
        .unwrap();

        assert_eq!(new.name, "X");
        assert!(!new.remote_enabled);
        assert_eq!(new.remote_password, None);
        assert_eq!(new.status, Status::Offline);
    }

    #[test]
    fn insert_ignores_client_id_and_unknown_keys() {
        let mut body = valid_body();
        body["id"] = json!(99);
        body["color"] = json!("blue");
        assert!(validate_insert(&body).is_ok());
    }

    #[test]
    fn insert_missing_name_is_named_in_message() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("name");

        let err = validate_insert(&body).unwrap_err();
        assert_eq!(err.violations()[0].path, "name");
        assert_eq!(err.to_string(), r#"Validation error: Required at "name""#);
    }

    #[test]
    fn insert_reports_every_violation() {
        let err = validate_insert(&json!({
            "name": "",
            "processor": 4,
            "storage": "1TB",
            "ipAddress": "not-an-ip",
            "remoteEnabled": "yes",
            "status": "retired"
        }))
        .unwrap_err();

        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            ["name", "processor", "ram", "ipAddress", "remoteEnabled", "status"]
        );
        let message = err.to_string();
        assert!(message.contains(r#"Expected string, received number at "processor""#));
        assert!(message.contains(r#"Invalid IP address format at "ipAddress""#));
        assert!(message.contains("received 'retired'"));
    }

    #[test]
    fn insert_rejects_non_object_body() {
        let err = validate_insert(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Expected object, received array"
        );
    }

    #[test]
    fn ip_format_is_dotted_quad() {
        for ip in ["10.0.0.1", "192.168.1.101", "999.1.1.1"] {
            assert!(IPV4_RE.is_match(ip), "{ip}");
        }
        for ip in ["10.0.0", "10.0.0.1.5", "a.b.c.d", " 10.0.0.1"] {
            assert!(!IPV4_RE.is_match(ip), "{ip}");
        }
    }

    #[test]
    fn update_accepts_empty_body() {
        assert_eq!(
            validate_update(&json!({})).unwrap(),
            UpdateComputer::default()
        );
    }

    #[test]
    fn update_only_sets_supplied_fields() {
        let update = validate_update(&json!({"status": "warning"})).unwrap();
        assert_eq!(update, UpdateComputer::status(Status::Warning));
    }

    #[test]
    fn update_distinguishes_null_password_from_absent() {
        let cleared = validate_update(&json!({"remotePassword": null})).unwrap();
        assert_eq!(cleared.remote_password, Some(None));

        let untouched = validate_update(&json!({"ram": "16GB"})).unwrap();
        assert_eq!(untouched.remote_password, None);
    }

    #[test]
    fn update_type_checks_present_fields() {
        let err = validate_update(&json!({"name": null, "remoteEnabled": 1})).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Validation error: Expected string, received null at "name"; Expected boolean, received number at "remoteEnabled""#
        );
    }
}
