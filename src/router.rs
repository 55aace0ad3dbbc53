//! Radix-tree request router and validating dispatcher.
//!
//! One tree per HTTP method. O(path-length) lookup. Every route carries the
//! [`Schema`] its handler expects; the router validates the request against
//! it and only calls the handler when validation succeeds.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use serde_json::Value;
use tracing::{debug, info};

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::openapi;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::schema::{Schema, Source};
use crate::status::Status;
use crate::validate::validate;

/// A registered route: what it accepts and who handles it.
pub(crate) struct Endpoint {
    pub(crate) schema: Schema,
    handler: BoxedHandler,
}

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<Arc<Endpoint>>>,
    table: Vec<(Method, String, Arc<Endpoint>)>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), table: Vec::new() }
    }

    /// Register a handler and its schema for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and must be declared in `schema`
    /// with [`Param::path`](crate::Param::path) to be validated:
    ///
    /// ```rust,no_run
    /// # use sieve::{Arguments, Json, Kind, Method, Param, Router, Schema};
    /// # async fn read_item(_: Arguments) -> Json<()> { Json(()) }
    /// Router::new()
    ///     .on(Method::Post, "/item/{item_id}",
    ///         Schema::new().param(Param::path("item_id", Kind::Int)),
    ///         read_item);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting path template, and on a path
    /// parameter that is optional or missing from the template.
    pub fn on(self, method: Method, path: &str, schema: Schema, handler: impl Handler) -> Self {
        self.add(method, path, schema, handler)
    }

    fn add(mut self, method: Method, path: &str, schema: Schema, handler: impl Handler) -> Self {
        for param in schema.params.iter().filter(|p| p.source == Source::Path) {
            let placeholder = format!("{{{}}}", param.wire_name());
            if !path.contains(&placeholder) {
                panic!("route `{path}`: path parameter `{}` is not in the template", param.name);
            }
            if !param.default.is_required() {
                panic!("route `{path}`: path parameter `{}` must be required", param.name);
            }
        }

        let endpoint = Arc::new(Endpoint { schema, handler: handler.into_boxed_handler() });
        self.routes
            .entry(method)
            .or_default()
            .insert(path, Arc::clone(&endpoint))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self.table.push((method, path.to_owned(), endpoint));
        self
    }

    /// Routes, validates and dispatches one request.
    ///
    /// - no route for the path → `404`
    /// - route exists under another method → `405`
    /// - validation fails → `422` listing every error; the handler is not called
    pub async fn handle(&self, mut req: Request) -> Response {
        let Some((endpoint, params)) = self.lookup(req.method, &req.path) else {
            let other_method = self.routes.iter()
                .any(|(m, tree)| *m != req.method && tree.at(&req.path).is_ok());
            let status = if other_method { Status::MethodNotAllowed } else { Status::NotFound };
            debug!(method = %req.method, path = %req.path, "no route");
            return Response::detail(status);
        };

        req.set_params(params);
        match validate(&endpoint.schema, &req) {
            Ok(args) => endpoint.handler.call(args).await,
            Err(errors) => {
                info!(method = %req.method, path = %req.path, errors = errors.len(), "request rejected");
                errors.into_response()
            }
        }
    }

    /// OpenAPI 3.1 description of every registered route.
    pub fn openapi(&self, title: &str, version: &str) -> Value {
        openapi::document(title, version, &self.table)
    }

    fn lookup(&self, method: Method, path: &str) -> Option<(Arc<Endpoint>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let endpoint = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| {
                let decoded = urlencoding::decode(v).map_or_else(|_| v.to_owned(), |d| d.into_owned());
                (k.to_owned(), decoded)
            })
            .collect();
        Some((endpoint, params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
