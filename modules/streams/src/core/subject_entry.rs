use backflow_utils_rs::core::sync::ArcShared;

use super::{Subscriber, SubscriberId};

/// Subscriber recorded by a subject, keyed by its identity.
pub(crate) struct SubjectEntry<T, F> {
  id:         SubscriberId,
  subscriber: ArcShared<dyn Subscriber<Input = T, Failure = F>>,
}

impl<T, F> SubjectEntry<T, F> {
  pub(crate) const fn new(id: SubscriberId, subscriber: ArcShared<dyn Subscriber<Input = T, Failure = F>>) -> Self {
    Self { id, subscriber }
  }

  pub(crate) const fn id(&self) -> SubscriberId {
    self.id
  }

  pub(crate) const fn subscriber(&self) -> &ArcShared<dyn Subscriber<Input = T, Failure = F>> {
    &self.subscriber
  }
}

impl<T, F> Clone for SubjectEntry<T, F> {
  fn clone(&self) -> Self {
    Self { id: self.id, subscriber: self.subscriber.clone() }
  }
}
