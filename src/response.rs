use serde::Deserialize;
use serde_json::Value;

/// The GraphQL response envelope.
///
/// Both fields stay raw so that `data` can be decoded into a caller-chosen
/// target after the envelope itself has been parsed. `null` and absent are
/// treated the same for both fields.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl Response {
    /// `data`, unless it is absent or `null`.
    pub(crate) fn take_data(&mut self) -> Option<Value> {
        self.data.take().filter(|value| !value.is_null())
    }

    /// `errors`, unless it is absent or `null`.
    pub(crate) fn take_errors(&mut self) -> Option<Value> {
        self.errors.take().filter(|value| !value.is_null())
    }
}
