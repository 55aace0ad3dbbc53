//! # sieve
//!
//! Declarative request validation over a minimal hyper framework.
//!
//! A route declares what it accepts (path parameters, query parameters, a
//! JSON body made of static models) as a [`Schema`]. Before the handler
//! runs, the router coerces and checks every declared input and either
//! calls the handler with typed [`Arguments`] or answers `422` with every
//! problem it found.
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio + hyper, HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//! - Generated OpenAPI 3.1 description of every route
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sieve::{Arguments, Error, Json, Kind, Method, Param, Router, Schema, Server};
//! use serde_json::{Value, json};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let app = Router::new().on(
//!         Method::Get,
//!         "/items/{item_id}",
//!         Schema::new()
//!             .param(Param::path("item_id", Kind::Int).ge(0.0))
//!             .param(Param::query("q", Kind::Str).optional().max_length(50)),
//!         read_item,
//!     );
//!
//!     Server::bind(([0, 0, 0, 0], 8000).into()).serve(app).await
//! }
//!
//! async fn read_item(args: Arguments) -> Result<Json<Value>, Error> {
//!     let item_id: i64 = args.get("item_id")?;
//!     let q: Option<String> = args.get("q")?;
//!     Ok(Json(json!({ "item_id": item_id, "q": q })))
//! }
//! ```
//!
//! The demo API lives in [`items`].

mod error;
mod handler;
mod method;
mod openapi;
mod request;
mod response;
mod router;
mod schema;
mod server;
mod status;
mod validate;

pub mod config;
pub mod items;

pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use schema::{Body, BodyParam, Constraints, Fallback, Field, Kind, Model, Param, Schema, Source};
pub use server::Server;
pub use status::Status;
pub use validate::{Arguments, ErrorKind, ValidationError, ValidationErrors, validate};
