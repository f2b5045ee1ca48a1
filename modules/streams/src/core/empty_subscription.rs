use backflow_utils_rs::core::sync::ArcShared;

use super::{Demand, Subscription, SubscriptionHandle};


/// Subscription that ignores every request and cancellation.
///
/// Handed out by publishers that do not apply backpressure, such as a retaining
/// [`Subject`](super::Subject), and by publishers that complete right away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptySubscription;

impl EmptySubscription {
  /// Returns a shared handle to a new empty subscription.
  #[must_use]
  pub fn handle() -> SubscriptionHandle {
    ArcShared::new(Self).into_dyn(|subscription| subscription as &dyn Subscription)
  }
}

impl Subscription for EmptySubscription {
  fn request(&self, _demand: Demand) {}

  fn cancel(&self) {}
}
