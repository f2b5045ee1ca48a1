use super::{Completion, Demand, SubscriptionHandle};

/// Consumer side of the protocol.
///
/// A publisher calls `receive_subscription` exactly once first, then `receive` any number of times
/// (never more often than demanded), then `receive_completion` at most once. The demand returned
/// from `receive` is added to the subscription's outstanding demand.
pub trait Subscriber: Send + Sync {
  /// Type of the values received.
  type Input;
  /// Type of the failure carried by a failed completion.
  type Failure;

  /// Receives the subscription that controls this subscriber's demand.
  fn receive_subscription(&self, subscription: SubscriptionHandle);

  /// Receives a value and returns how many more values may be sent.
  fn receive(&self, input: Self::Input) -> Demand;

  /// Receives the terminal signal of the chain.
  fn receive_completion(&self, completion: Completion<Self::Failure>);
}
