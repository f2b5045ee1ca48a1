use backflow_utils_rs::core::sync::ArcShared;

use super::Subscriber;

/// Producer side of the protocol.
///
/// Every `subscribe` call starts an independent chain: the publisher must hand the subscriber a
/// subscription before delivering anything else.
pub trait Publisher {
  /// Type of the values published.
  type Output;
  /// Type of the failure carried by a failed completion.
  type Failure;

  /// Attaches `subscriber` to this publisher.
  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = Self::Output, Failure = Self::Failure> + 'static;
}
