//! Unified error type.

use thiserror::Error;

/// The error type returned by sieve's fallible operations.
///
/// Rejected input is not an `Error`: the validator answers it with a `422`
/// [`ValidationErrors`](crate::ValidationErrors) response before any handler
/// runs. This type surfaces infrastructure failures (binding to a port,
/// accepting a connection) and argument extraction inside handlers.
///
/// `Error` implements [`IntoResponse`](crate::IntoResponse) as a `500`, so
/// handlers can return `Result<_, Error>` and use `?` on
/// [`Arguments::get`](crate::Arguments::get).
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// The handler asked for an argument its route never declared.
    #[error("argument `{0}` is not declared on this route")]
    MissingArgument(String),

    /// A validated argument did not deserialize into the requested type.
    #[error("argument `{name}`: {source}")]
    Argument {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
