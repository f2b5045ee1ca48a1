use crate::core::Demand;

/// Raw call received by a [`TestSubscription`](super::TestSubscription).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEvent {
  /// `request` was called with the contained demand.
  Requested(Demand),
  /// `cancel` was called.
  Cancelled,
}
