use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::domain::model::{Parameter, Request};
use crate::utils::error::{ParamError, Result};
use crate::utils::timestamp;

impl Request {
    /// First parameter whose name matches exactly, in sequence order.
    /// Duplicate names are legal; later entries are shadowed.
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .as_deref()?
            .iter()
            .find(|parameter| parameter.name == name)
    }

    /// The primitive the typed accessors delegate to.
    pub fn try_get_parameter(&self, name: &str) -> Option<&Parameter> {
        self.find(name)
    }

    /// The parameter's stored string, or `None` if absent or not
    /// string-backed.
    pub fn try_get_str(&self, name: &str) -> Option<&str> {
        self.text_value(name)
    }

    /// The parameter parsed as a base-10 integer. Absent and unparseable
    /// both yield `None`; callers cannot tell the two apart.
    pub fn try_get_int(&self, name: &str) -> Option<i64> {
        self.text_value(name)?.trim().parse().ok()
    }

    /// The parameter parsed as a decimal number. Same contract as
    /// [`try_get_int`](Self::try_get_int).
    pub fn try_get_decimal(&self, name: &str) -> Option<f64> {
        self.text_value(name)?.trim().parse().ok()
    }

    /// The parameter parsed as a boolean: "true"/"false", case-insensitive.
    pub fn try_get_bool(&self, name: &str) -> Option<bool> {
        match self.text_value(name)?.trim() {
            t if t.eq_ignore_ascii_case("true") => Some(true),
            t if t.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// The parameter parsed as a timestamp. Accepts RFC 3339 plus the
    /// tolerant layouts in [`timestamp`].
    pub fn try_get_timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        timestamp::parse(self.text_value(name)?)
    }

    // Shared string-backed view. Values are expected to be stored as
    // strings; anything else is flagged and treated as unparseable.
    fn text_value(&self, name: &str) -> Option<&str> {
        let parameter = self.find(name)?;
        let value = parameter.value.as_ref()?;
        match parameter.as_text() {
            Some(text) => Some(text),
            None => {
                tracing::warn!(
                    "parameter '{}' is not string-backed ({}); treating as unparseable",
                    name,
                    json_type_name(value)
                );
                None
            }
        }
    }

    /// Unconditional lookup. Fails with a missing-argument error naming the
    /// parameter when absent.
    #[deprecated(note = "use try_get_parameter instead")]
    pub fn get_parameter(&self, name: &str) -> Result<&Parameter> {
        self.find(name).ok_or_else(|| ParamError::MissingParameter {
            name: name.to_string(),
        })
    }

    /// Unconditional lookup plus a direct conversion of the raw value into
    /// `T`. The value is not pre-converted: a string-stored "42" does not
    /// convert to an integer.
    #[deprecated(note = "use the try_get_* accessors instead")]
    pub fn get_parameter_value<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let parameter = self.find(name).ok_or_else(|| ParamError::MissingParameter {
            name: name.to_string(),
        })?;
        let raw = parameter.value.clone().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(raw).map_err(|e| ParamError::InvalidCast {
            name: name.to_string(),
            target: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
