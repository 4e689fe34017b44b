use serde::{Deserialize, Serialize};

/// An incoming request carrying an ordered bag of loosely-typed parameters.
///
/// The bag may be absent entirely; absence and emptiness behave the same
/// for every accessor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

/// A named, loosely-typed value attached to a request.
///
/// The value is opaque at this layer; typed interpretation happens on read.
/// Parameter names are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl Request {
    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters: Some(parameters),
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// The value viewed as its stored string, if it is string-backed.
    pub fn as_text(&self) -> Option<&str> {
        match self.value.as_ref()? {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        }
    }
}
