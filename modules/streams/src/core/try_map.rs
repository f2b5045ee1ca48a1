use backflow_utils_rs::core::sync::ArcShared;

use super::{Publisher, Subscriber, try_map_subscriber::TryMapSubscriber};

#[cfg(test)]
mod tests;

/// Publisher that applies a fallible transform to every upstream value.
///
/// Behaves like [`Map`](super::Map) until the transform returns `Err`. The failing value is not
/// forwarded; instead the chain delivers exactly one `Failed` completion downstream, cancels
/// upstream, and silently drops anything upstream still pushes afterwards. The transform runs once
/// per accepted value and is never retried.
///
/// The downstream failure type `E` is the transform's error type; upstream failures are converted
/// with `Into<E>`.
#[derive(Debug, Clone)]
pub struct TryMap<U, F> {
  upstream:  U,
  transform: F,
}

impl<U, F> TryMap<U, F> {
  /// Creates a fallible mapping publisher over `upstream`.
  #[must_use]
  pub const fn new(upstream: U, transform: F) -> Self {
    Self { upstream, transform }
  }

  /// Returns the upstream publisher.
  #[must_use]
  pub const fn upstream(&self) -> &U {
    &self.upstream
  }
}

impl<U, F, T, E> Publisher for TryMap<U, F>
where
  U: Publisher,
  U::Output: 'static,
  U::Failure: Into<E> + 'static,
  F: FnMut(U::Output) -> Result<T, E> + Clone + Send + 'static,
{
  type Output = T;
  type Failure = E;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = E> + 'static, {
    let upstream_side = TryMapSubscriber::<S, F, U::Output, U::Failure>::new(subscriber, self.transform.clone());
    self.upstream.subscribe(ArcShared::new(upstream_side));
  }
}
