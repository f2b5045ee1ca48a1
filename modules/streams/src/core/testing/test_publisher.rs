use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::TestSubscription;
use crate::core::{Completion, Demand, Publisher, Subscriber, Subscription};

#[cfg(test)]
mod tests;

type DynSubscriber<T, F> = ArcShared<dyn Subscriber<Input = T, Failure = F>>;

/// Publisher driven by the test itself.
///
/// Every subscriber receives the same [`TestSubscription`], so the test can inspect the demand and
/// cancellations an operator forwards upstream. Only the most recent subscriber is driven by
/// [`send`](Self::send) and [`send_completion`](Self::send_completion). Clones share state.
pub struct TestPublisher<T, F> {
  subscription: ArcShared<TestSubscription>,
  subscriber:   ArcShared<SpinSyncMutex<Option<DynSubscriber<T, F>>>>,
}

impl<T, F> TestPublisher<T, F> {
  /// Creates a publisher without subscribers.
  #[must_use]
  pub fn new() -> Self {
    Self {
      subscription: ArcShared::new(TestSubscription::new()),
      subscriber:   ArcShared::new(SpinSyncMutex::new(None)),
    }
  }

  /// Returns the subscription handed to subscribers.
  #[must_use]
  pub fn subscription(&self) -> ArcShared<TestSubscription> {
    self.subscription.clone()
  }

  /// Returns `true` once a subscriber has been attached.
  #[must_use]
  pub fn has_subscriber(&self) -> bool {
    self.subscriber.lock().is_some()
  }

  /// Delivers `value` to the subscriber and returns the demand it reports.
  ///
  /// Returns [`Demand::NONE`] when nobody is subscribed.
  pub fn send(&self, value: T) -> Demand {
    let subscriber = self.subscriber.lock().clone();
    subscriber.map_or(Demand::NONE, |subscriber| subscriber.receive(value))
  }

  /// Delivers `completion` to the subscriber, if any.
  pub fn send_completion(&self, completion: Completion<F>) {
    let subscriber = self.subscriber.lock().clone();
    if let Some(subscriber) = subscriber {
      subscriber.receive_completion(completion);
    }
  }
}

impl<T, F> Clone for TestPublisher<T, F> {
  fn clone(&self) -> Self {
    Self { subscription: self.subscription.clone(), subscriber: self.subscriber.clone() }
  }
}

impl<T, F> Default for TestPublisher<T, F> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, F> Publisher for TestPublisher<T, F> {
  type Output = T;
  type Failure = F;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = F> + 'static, {
    let subscriber = subscriber.into_dyn(|subscriber| subscriber as &dyn Subscriber<Input = T, Failure = F>);
    *self.subscriber.lock() = Some(subscriber.clone());
    subscriber.receive_subscription(self.subscription.clone().into_dyn(|subscription| subscription as &dyn Subscription));
  }
}
