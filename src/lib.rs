//! Minimal GraphQL client: POST a query over HTTP and decode the
//! `{data, errors}` envelope into typed values.
//!
//! ```no_run
//! use gql_client::{Client, Request};
//! use std::collections::HashMap;
//!
//! # async fn run() -> Result<(), gql_client::Error> {
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct Data {
//!     author: Vec<Author>,
//! }
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct Author {
//!     id: i64,
//!     name: String,
//! }
//!
//! let client = Client::new("http://localhost:8080/v1alpha1/graphql", HashMap::new());
//! let mut data = Data::default();
//! client
//!     .execute(&Request::new("{ author { id name } }"), &mut data)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod introspection;
mod request;
mod response;

pub use client::Client;
pub use error::{Error, Errors, Extensions, GraphQLError, Location, PathSegment};
pub use introspection::{
    Directive, EnumValue, Field, FullType, InputValue, IntrospectionResponse, RootType, Schema,
    TypeKind, TypeRef, INTROSPECTION_QUERY,
};
pub use request::Request;
pub use response::Response;
