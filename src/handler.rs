//! Handler trait and type erasure.
//!
//! # How async handlers are stored
//!
//! The router holds handlers of *different* types in one radix tree per
//! method, so each handler is hidden behind a trait object
//! (`dyn ErasedHandler`) and stored uniformly next to its route schema.
//!
//! ```text
//! async fn read_item(args: Arguments) -> … { … }   ← user writes this
//!        ↓ router.on(Method::Post, "/item/{item_id}", schema, read_item)
//! read_item.into_boxed_handler()                   ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(read_item))                   ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(args)  after validation succeeds    ← one vtable dispatch
//!        ↓
//! Box::pin(async { read_item(args).await.into_response() })
//! ```
//!
//! A handler only ever receives validated [`Arguments`]. It never sees the
//! raw request and is never called when validation fails.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::response::{IntoResponse, Response};
use crate::validate::Arguments;

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, args: Arguments) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// Automatically satisfied for any `async fn` (or closure returning a
/// future) with the signature:
///
/// ```text
/// async fn name(args: Arguments) -> impl IntoResponse
/// ```
///
/// The trait is sealed: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Arguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Arguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Bridges a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Arguments) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, args: Arguments) -> BoxFuture {
        let fut = (self.0)(args);
        Box::pin(async move { fut.await.into_response() })
    }
}
