use alloc::vec::Vec;

use backflow_utils_rs::core::sync::SpinSyncMutex;

use super::SubscriptionEvent;
use crate::core::{Demand, Subscription};


/// Subscription that records every call it receives and does nothing else.
///
/// Unlike real subscriptions it records repeated cancellations, so tests can assert exactly what
/// an operator forwards upstream.
#[derive(Debug, Default)]
pub struct TestSubscription {
  history: SpinSyncMutex<Vec<SubscriptionEvent>>,
}

impl TestSubscription {
  /// Creates a subscription with an empty history.
  #[must_use]
  pub const fn new() -> Self {
    Self { history: SpinSyncMutex::new(Vec::new()) }
  }

  /// Returns a snapshot of the recorded calls.
  #[must_use]
  pub fn history(&self) -> Vec<SubscriptionEvent> {
    self.history.lock().clone()
  }

  /// Returns the demands requested so far, in order.
  #[must_use]
  pub fn requests(&self) -> Vec<Demand> {
    self
      .history
      .lock()
      .iter()
      .filter_map(|event| match event {
        | SubscriptionEvent::Requested(demand) => Some(*demand),
        | SubscriptionEvent::Cancelled => None,
      })
      .collect()
  }

  /// Returns how many times `cancel` was called.
  #[must_use]
  pub fn cancellations(&self) -> usize {
    self.history.lock().iter().filter(|event| **event == SubscriptionEvent::Cancelled).count()
  }
}

impl Subscription for TestSubscription {
  fn request(&self, demand: Demand) {
    self.history.lock().push(SubscriptionEvent::Requested(demand));
  }

  fn cancel(&self) {
    self.history.lock().push(SubscriptionEvent::Cancelled);
  }
}
