use std::future::{Future, IntoFuture};

/// Can be suspended on directly: a `Future`.
///
/// `poll` is both the readiness check and the resume operation, so nothing
/// beyond `Future` is required.
pub trait Awaiter: Future {}

impl<F: Future + ?Sized> Awaiter for F {}

/// Can appear after `.await`: converts into a future.
///
/// Every sized future is awaitable through the std identity conversion.
/// `is!(awaitable: T)` also accepts unsized awaiters.
pub trait Awaitable: IntoFuture {}

impl<T: IntoFuture> Awaitable for T {}
