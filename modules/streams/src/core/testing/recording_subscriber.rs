use alloc::{boxed::Box, vec::Vec};

use backflow_utils_rs::core::sync::SpinSyncMutex;

use super::RecordedEvent;
use crate::core::{Completion, Demand, Subscriber, SubscriptionHandle};


type SubscriptionCallback = Box<dyn Fn(&SubscriptionHandle) + Send + Sync>;
type ValueCallback<T> = Box<dyn Fn(&T) -> Demand + Send + Sync>;
type CompletionCallback<F> = Box<dyn Fn(&Completion<F>) + Send + Sync>;
type DropCallback = Box<dyn FnOnce() + Send + Sync>;

/// Subscriber that appends every event it receives to an ordered history.
///
/// Each event is recorded before the matching callback runs, so events caused re-entrantly by a
/// callback appear after the event that triggered them. Without an `on_value` callback every value
/// returns [`Demand::NONE`]. An `on_drop` callback runs once the last handle to the subscriber is
/// released, which lets tests observe that a finished chain no longer retains it.
pub struct RecordingSubscriber<T, F> {
  history:       SpinSyncMutex<Vec<RecordedEvent<T, F>>>,
  on_subscribe:  Option<SubscriptionCallback>,
  on_value:      Option<ValueCallback<T>>,
  on_completion: Option<CompletionCallback<F>>,
  on_drop:       Option<DropCallback>,
}

impl<T, F> RecordingSubscriber<T, F> {
  /// Creates a subscriber without callbacks.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      history:       SpinSyncMutex::new(Vec::new()),
      on_subscribe:  None,
      on_value:      None,
      on_completion: None,
      on_drop:       None,
    }
  }

  /// Creates a subscriber that requests `demand` as soon as it is subscribed.
  #[must_use]
  pub fn requesting(demand: Demand) -> Self {
    Self::new().with_on_subscribe(move |subscription| subscription.request(demand))
  }

  /// Sets the callback run after a subscription is recorded.
  #[must_use]
  pub fn with_on_subscribe<C>(mut self, callback: C) -> Self
  where
    C: Fn(&SubscriptionHandle) + Send + Sync + 'static, {
    self.on_subscribe = Some(Box::new(callback));
    self
  }

  /// Sets the callback run after a value is recorded; its result is the demand returned upstream.
  #[must_use]
  pub fn with_on_value<C>(mut self, callback: C) -> Self
  where
    C: Fn(&T) -> Demand + Send + Sync + 'static, {
    self.on_value = Some(Box::new(callback));
    self
  }

  /// Sets the callback run after a completion is recorded.
  #[must_use]
  pub fn with_on_completion<C>(mut self, callback: C) -> Self
  where
    C: Fn(&Completion<F>) + Send + Sync + 'static, {
    self.on_completion = Some(Box::new(callback));
    self
  }

  /// Sets the callback run when the subscriber is dropped.
  #[must_use]
  pub fn with_on_drop<C>(mut self, callback: C) -> Self
  where
    C: FnOnce() + Send + Sync + 'static, {
    self.on_drop = Some(Box::new(callback));
    self
  }

  /// Returns every subscription received, in order.
  #[must_use]
  pub fn subscriptions(&self) -> Vec<SubscriptionHandle> {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | RecordedEvent::Subscription(subscription) => Some(subscription.clone()),
        | _ => None,
      })
      .collect()
  }

  /// Returns the number of recorded events.
  #[must_use]
  pub fn len(&self) -> usize {
    self.history.lock().len()
  }

  /// Returns `true` when nothing has been recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.history.lock().is_empty()
  }
}

impl<T: Clone, F: Clone> RecordingSubscriber<T, F> {
  /// Returns a snapshot of the full history.
  #[must_use]
  pub fn history(&self) -> Vec<RecordedEvent<T, F>> {
    self.history.lock().clone()
  }

  /// Returns every value received, in order.
  #[must_use]
  pub fn values(&self) -> Vec<T> {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | RecordedEvent::Value(value) => Some(value.clone()),
        | _ => None,
      })
      .collect()
  }

  /// Returns every completion received, in order.
  #[must_use]
  pub fn completions(&self) -> Vec<Completion<F>> {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | RecordedEvent::Completion(completion) => Some(completion.clone()),
        | _ => None,
      })
      .collect()
  }
}

impl<T, F> Default for RecordingSubscriber<T, F> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, F> Drop for RecordingSubscriber<T, F> {
  fn drop(&mut self) {
    if let Some(callback) = self.on_drop.take() {
      callback();
    }
  }
}

impl<T, F> Subscriber for RecordingSubscriber<T, F>
where
  T: Clone + Send,
  F: Clone + Send,
{
  type Input = T;
  type Failure = F;

  fn receive_subscription(&self, subscription: SubscriptionHandle) {
    self.history.lock().push(RecordedEvent::Subscription(subscription.clone()));
    if let Some(callback) = &self.on_subscribe {
      callback(&subscription);
    }
  }

  fn receive(&self, input: T) -> Demand {
    self.history.lock().push(RecordedEvent::Value(input.clone()));
    self.on_value.as_ref().map_or(Demand::NONE, |callback| callback(&input))
  }

  fn receive_completion(&self, completion: Completion<F>) {
    self.history.lock().push(RecordedEvent::Completion(completion.clone()));
    if let Some(callback) = &self.on_completion {
      callback(&completion);
    }
  }
}
