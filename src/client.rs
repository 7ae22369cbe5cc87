use std::collections::HashMap;

use http::header::CONTENT_TYPE;
use http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, Errors};
use crate::introspection::{IntrospectionResponse, INTROSPECTION_QUERY};
use crate::request::Request;
use crate::response::Response;

/// Executes GraphQL requests against a single endpoint.
///
/// The endpoint is fixed at construction; the header map is mutable and every
/// header in it is attached to each outbound request. Header mutation takes
/// `&mut self`, so concurrent use of one `Client` from several tasks is
/// limited to [`Client::execute`] by the borrow checker. The inner
/// `reqwest::Client` is reused across calls; connection pooling is its
/// concern, not this layer's.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    headers: HashMap<String, String>,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for `endpoint`. No network activity happens here.
    pub fn new(endpoint: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Upserts a header; it is sent on every subsequent call until removed.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        self.headers.remove(key)
    }

    /// Executes `request` and decodes the response `data` into `target`.
    ///
    /// `target` is only written when the envelope carries a non-null `data`
    /// field, and it is written even when the server also reports errors, so
    /// a partial success leaves the decoded data behind alongside the
    /// returned [`Error::Server`] value. HTTP status codes are not
    /// interpreted; an error body on a non-2xx response decodes the same way.
    pub async fn execute<T>(&self, request: &Request, target: &mut T) -> Result<(), Error>
    where
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(request).map_err(Error::Encode)?;
        let headers = HeaderMap::try_from(&self.headers)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            operation = request.operation_name.as_deref().unwrap_or(""),
            "sending graphql request"
        );

        let raw = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers)
            .body(payload)
            .send()
            .await?;
        let body = raw.bytes().await?;

        let response: Response = serde_json::from_slice(&body).map_err(Error::Decode)?;
        decode_envelope(response, target)
    }

    /// Executes with `extra_headers` merged into the client's header set for
    /// the duration of this call only.
    ///
    /// Keys that already existed are restored to their prior values
    /// afterwards; keys that did not exist are removed. Restoration happens
    /// on failure too, so the persistent header set is unchanged after
    /// return. Dropping the future mid-flight skips the restore.
    pub async fn execute_with_headers<T>(
        &mut self,
        request: &Request,
        extra_headers: &HashMap<String, String>,
        target: &mut T,
    ) -> Result<(), Error>
    where
        T: DeserializeOwned,
    {
        let prior: Vec<(String, Option<String>)> = extra_headers
            .keys()
            .map(|key| (key.clone(), self.headers.get(key).cloned()))
            .collect();
        for (key, value) in extra_headers {
            self.headers.insert(key.clone(), value.clone());
        }

        let result = self.execute(request, target).await;

        for (key, value) in prior {
            match value {
                Some(value) => self.headers.insert(key, value),
                None => self.headers.remove(&key),
            };
        }
        result
    }

    /// Runs `request` on a background task and hands the outcome to
    /// `callback`, which is invoked exactly once with either the decoded
    /// data or the error. An envelope without `data` yields `T::default()`.
    ///
    /// Must be called within a tokio runtime.
    pub fn execute_with_callback<T, F>(&self, request: Request, callback: F)
    where
        T: DeserializeOwned + Default + Send + 'static,
        F: FnOnce(Result<T, Error>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let mut target = T::default();
            let result = client.execute(&request, &mut target).await;
            callback(result.map(|()| target));
        });
    }

    /// Runs the standard introspection query and decodes the schema
    /// description.
    pub async fn introspect(&self) -> Result<IntrospectionResponse, Error> {
        let mut response = IntrospectionResponse::default();
        self.execute(&Request::new(INTROSPECTION_QUERY), &mut response)
            .await?;
        Ok(response)
    }
}

fn decode_envelope<T>(mut response: Response, target: &mut T) -> Result<(), Error>
where
    T: DeserializeOwned,
{
    if let Some(data) = response.take_data() {
        *target = serde_json::from_value(data).map_err(Error::Decode)?;
    }

    if let Some(errors) = response.take_errors() {
        let errors: Errors = serde_json::from_value(errors).map_err(Error::Decode)?;
        tracing::debug!(count = errors.len(), "server reported graphql errors");
        return Err(Error::Server(errors));
    }

    Ok(())
}
