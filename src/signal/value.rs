//! The dynamic value type carried by reputation signals.
//!
//! Signal bags arrive as JSON from the scoring service; [`SignalValue`] is
//! the closed set of shapes the presentation layer accepts. Converting from
//! [`serde_json::Value`] is total, so malformed or surprising payloads can
//! never fail past the parse step.

/// A single reputation signal value.
///
/// Maps hold their entries in insertion order, which is the order the
/// scoring service emitted them.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalValue {
    /// Explicit null.
    Null,
    /// Boolean flag, e.g. `supports_https`.
    Bool(bool),
    /// Numeric value. Non-finite values are representable and render as the
    /// placeholder instead of `NaN`/`inf` text.
    Number(f64),
    /// Free-form text.
    Text(String),
    /// Ordered list of nested values.
    List(Vec<SignalValue>),
    /// Ordered key/value map of nested values.
    Map(Vec<(String, SignalValue)>),
}

impl SignalValue {
    /// Parse a JSON document into a signal value.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(text).map(Self::from)
    }

    /// Whether this value decomposes into children instead of rendering as a
    /// single line of text.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Short name of the value's shape, for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<serde_json::Value> for SignalValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                Self::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Array(elements) => {
                Self::List(elements.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
        }
    }
}
