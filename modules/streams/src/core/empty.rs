use core::{fmt, marker::PhantomData};

use backflow_utils_rs::core::sync::ArcShared;

use super::{Completion, EmptySubscription, Publisher, Subscriber};


/// Publisher that emits no values.
///
/// By default it finishes immediately after delivering the subscription; [`Empty::never`] builds
/// one that stays silent forever.
pub struct Empty<T, E> {
  completes_immediately: bool,
  _marker:               PhantomData<fn() -> (T, E)>,
}

impl<T, E> Empty<T, E> {
  /// Creates a publisher that finishes immediately.
  #[must_use]
  pub const fn new() -> Self {
    Self { completes_immediately: true, _marker: PhantomData }
  }

  /// Creates a publisher that never completes.
  #[must_use]
  pub const fn never() -> Self {
    Self { completes_immediately: false, _marker: PhantomData }
  }

  /// Returns `true` when subscribers are finished right away.
  #[must_use]
  pub const fn completes_immediately(&self) -> bool {
    self.completes_immediately
  }
}

impl<T, E> Default for Empty<T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, E> Clone for Empty<T, E> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T, E> Copy for Empty<T, E> {}

impl<T, E> fmt::Debug for Empty<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Empty").field("completes_immediately", &self.completes_immediately).finish()
  }
}

impl<T, E> Publisher for Empty<T, E> {
  type Output = T;
  type Failure = E;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = E> + 'static, {
    subscriber.receive_subscription(EmptySubscription::handle());
    if self.completes_immediately {
      subscriber.receive_completion(Completion::Finished);
    }
  }
}
