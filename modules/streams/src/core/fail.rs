use core::marker::PhantomData;

use backflow_utils_rs::core::sync::ArcShared;

use super::{Completion, EmptySubscription, Publisher, Subscriber};

#[cfg(test)]
mod tests;

/// Publisher that fails every subscriber immediately with a clone of `failure`.
#[derive(Debug)]
pub struct Fail<T, E> {
  failure: E,
  _output: PhantomData<fn() -> T>,
}

impl<T, E> Fail<T, E> {
  /// Creates a publisher failing with `failure`.
  #[must_use]
  pub const fn new(failure: E) -> Self {
    Self { failure, _output: PhantomData }
  }

  /// Returns the failure delivered to subscribers.
  #[must_use]
  pub const fn failure(&self) -> &E {
    &self.failure
  }
}

impl<T, E: Clone> Clone for Fail<T, E> {
  fn clone(&self) -> Self {
    Self::new(self.failure.clone())
  }
}

impl<T, E: Clone> Publisher for Fail<T, E> {
  type Output = T;
  type Failure = E;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = E> + 'static, {
    subscriber.receive_subscription(EmptySubscription::handle());
    subscriber.receive_completion(Completion::Failed(self.failure.clone()));
  }
}
