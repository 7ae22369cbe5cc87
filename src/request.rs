use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single GraphQL request: the query document, its variables and an
/// optional operation name.
///
/// The query is opaque text handed to the server; no GraphQL syntax
/// validation happens on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub query: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub variables: HashMap<String, Value>,
    #[serde(
        rename = "operationName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub operation_name: Option<String>,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: HashMap::new(),
            operation_name: None,
        }
    }

    /// Selects the operation to run when the document defines more than one.
    pub fn operation_name(self, operation_name: impl Into<String>) -> Self {
        Self {
            operation_name: Some(operation_name.into()),
            ..self
        }
    }

    /// Replaces the whole variable map.
    pub fn variables(self, variables: HashMap<String, Value>) -> Self {
        Self { variables, ..self }
    }

    /// Upserts a single variable.
    pub fn variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialized_body_round_trips() {
        let request = Request::new("query Authors($limit: Int) { author { id name } }")
            .operation_name("Authors")
            .variable("limit", 10);

        let body = serde_json::to_string(&request).unwrap();
        let back: Request = serde_json::from_str(&body).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn empty_fields_are_omitted() {
        let request = Request::new("{ author { id } }");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "query": "{ author { id } }" }));
    }

    #[test]
    fn operation_name_uses_wire_casing() {
        let request = Request::new("query A { a }").operation_name("A");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["operationName"], json!("A"));
    }
}
