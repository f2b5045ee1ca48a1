use core::fmt;

use crate::core::{Completion, EmptySubscription, SubscriptionHandle};


/// Event observed by a [`RecordingSubscriber`](super::RecordingSubscriber).
///
/// Equality treats every subscription as interchangeable and compares values and completions
/// structurally.
pub enum RecordedEvent<T, F> {
  /// A subscription was received.
  Subscription(SubscriptionHandle),
  /// A value was received.
  Value(T),
  /// A completion was received.
  Completion(Completion<F>),
}

impl<T, F> RecordedEvent<T, F> {
  /// Returns a subscription event, for use as an expected history entry.
  #[must_use]
  pub fn subscription() -> Self {
    Self::Subscription(EmptySubscription::handle())
  }

  /// Returns a `Finished` completion event.
  #[must_use]
  pub const fn finished() -> Self {
    Self::Completion(Completion::Finished)
  }

  /// Returns a `Failed` completion event.
  #[must_use]
  pub const fn failed(failure: F) -> Self {
    Self::Completion(Completion::Failed(failure))
  }
}

impl<T: Clone, F: Clone> Clone for RecordedEvent<T, F> {
  fn clone(&self) -> Self {
    match self {
      | Self::Subscription(subscription) => Self::Subscription(subscription.clone()),
      | Self::Value(value) => Self::Value(value.clone()),
      | Self::Completion(completion) => Self::Completion(completion.clone()),
    }
  }
}

impl<T: PartialEq, F: PartialEq> PartialEq for RecordedEvent<T, F> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      | (Self::Subscription(_), Self::Subscription(_)) => true,
      | (Self::Value(left), Self::Value(right)) => left == right,
      | (Self::Completion(left), Self::Completion(right)) => left == right,
      | _ => false,
    }
  }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for RecordedEvent<T, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Subscription(_) => f.write_str("subscription"),
      | Self::Value(value) => write!(f, "value({value:?})"),
      | Self::Completion(Completion::Finished) => f.write_str("finished"),
      | Self::Completion(Completion::Failed(failure)) => write!(f, "failure({failure:?})"),
    }
  }
}
