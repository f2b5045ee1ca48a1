/// Lifecycle of an operator's link between its upstream and downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelayStatus {
  /// Subscribed upstream, waiting for the upstream subscription.
  AwaitingSubscription,
  /// Upstream subscription received; values and demand flow.
  Active,
  /// Downstream cancelled.
  Cancelled,
  /// A completion was delivered downstream.
  Completed,
}

impl RelayStatus {
  /// Returns `true` once the link can no longer carry signals.
  pub(crate) const fn is_terminal(self) -> bool {
    matches!(self, Self::Cancelled | Self::Completed)
  }
}
