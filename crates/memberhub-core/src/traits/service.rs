//! Service marker trait.

/// Marker trait for services.
///
/// All services in `memberhub-service` implement this trait so that callers
/// can hold them uniformly behind `Arc`.
pub trait Service: Send + Sync + 'static {}
