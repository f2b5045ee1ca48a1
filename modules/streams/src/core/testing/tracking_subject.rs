use alloc::vec::Vec;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::SubjectEvent;
use crate::core::{Completion, Publisher, Subject, SubjectConfig, Subscriber, SubscriberId};

#[cfg(test)]
mod tests;

/// [`Subject`] that additionally records every attach and send performed through it.
///
/// Attachments are recorded after the subscriber has received its subscription. Sends are recorded
/// once each, whether or not the subject still delivers them. Clones share the subject and the
/// history.
pub struct TrackingSubject<T, F> {
  subject: Subject<T, F>,
  history: ArcShared<SpinSyncMutex<Vec<SubjectEvent<T, F>>>>,
}

impl<T, F> TrackingSubject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  /// Creates a tracking subject with the default configuration.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(SubjectConfig::default())
  }

  /// Creates a tracking subject with the provided configuration.
  #[must_use]
  pub fn with_config(config: SubjectConfig) -> Self {
    Self { subject: Subject::with_config(config), history: ArcShared::new(SpinSyncMutex::new(Vec::new())) }
  }

  /// Returns the wrapped subject.
  #[must_use]
  pub const fn subject(&self) -> &Subject<T, F> {
    &self.subject
  }

  /// Attaches `subscriber` and records its identity.
  pub fn attach<S>(&self, subscriber: ArcShared<S>) -> SubscriberId
  where
    S: Subscriber<Input = T, Failure = F> + 'static, {
    let id = self.subject.attach(subscriber);
    self.history.lock().push(SubjectEvent::Subscriber(id));
    id
  }

  /// Records and sends `value`.
  pub fn send(&self, value: T) {
    self.history.lock().push(SubjectEvent::Value(value.clone()));
    self.subject.send(value);
  }

  /// Records and sends `completion`.
  pub fn send_completion(&self, completion: Completion<F>) {
    self.history.lock().push(SubjectEvent::Completion(completion.clone()));
    self.subject.send_completion(completion);
  }

  /// Returns a snapshot of the recorded operations.
  #[must_use]
  pub fn history(&self) -> Vec<SubjectEvent<T, F>> {
    self.history.lock().clone()
  }
}

impl<T, F> Clone for TrackingSubject<T, F> {
  fn clone(&self) -> Self {
    Self { subject: self.subject.clone(), history: self.history.clone() }
  }
}

impl<T, F> Default for TrackingSubject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, F> Publisher for TrackingSubject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  type Output = T;
  type Failure = F;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = F> + 'static, {
    let _id = self.attach(subscriber);
  }
}
