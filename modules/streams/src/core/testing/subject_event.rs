use crate::core::{Completion, SubscriberId};

/// Operation recorded by a [`TrackingSubject`](super::TrackingSubject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectEvent<T, F> {
  /// A subscriber was attached.
  Subscriber(SubscriberId),
  /// A value was sent.
  Value(T),
  /// A completion was sent.
  Completion(Completion<F>),
}
