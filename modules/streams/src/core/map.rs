use backflow_utils_rs::core::sync::ArcShared;

use super::{Publisher, Subscriber, map_subscriber::MapSubscriber};


/// Publisher that applies a total transform to every upstream value.
///
/// Demand, cancellation and completion pass through unchanged: the demand a downstream subscriber
/// returns for a value is exactly the demand handed back upstream, and no demand is requested
/// upstream until the downstream subscriber asks for it. Each `subscribe` clones the transform, so
/// independent chains never share transform state.
#[derive(Debug, Clone)]
pub struct Map<U, F> {
  upstream:  U,
  transform: F,
}

impl<U, F> Map<U, F> {
  /// Creates a mapping publisher over `upstream`.
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

impl<U, F, T> Publisher for Map<U, F>
where
  U: Publisher,
  U::Output: 'static,
  F: FnMut(U::Output) -> T + Clone + Send + 'static,
{
  type Output = T;
  type Failure = U::Failure;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = U::Failure> + 'static, {
    let upstream_side = MapSubscriber::new(subscriber, self.transform.clone());
    self.upstream.subscribe(ArcShared::new(upstream_side));
  }
}
