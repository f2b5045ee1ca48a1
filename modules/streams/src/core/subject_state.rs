use alloc::{collections::VecDeque, vec::Vec};

use super::{Completion, SubscriberId, subject_entry::SubjectEntry, subject_signal::SubjectSignal};

/// Mutable state shared by a subject and its pruning subscriptions.
pub(crate) struct SubjectState<T, F> {
  /// Recorded subscribers in subscribe order.
  pub(crate) entries:    Vec<SubjectEntry<T, F>>,
  /// Signals accepted but not yet fanned out.
  pub(crate) pending:    VecDeque<SubjectSignal<T, F>>,
  /// Set while some caller is fanning out `pending`.
  pub(crate) draining:   bool,
  /// The accepted completion; once set, further signals are dropped.
  pub(crate) completion: Option<Completion<F>>,
  /// Set when the completion has been taken off the queue for delivery.
  pub(crate) terminated: bool,
}

impl<T, F> SubjectState<T, F> {
  pub(crate) const fn new() -> Self {
    Self { entries: Vec::new(), pending: VecDeque::new(), draining: false, completion: None, terminated: false }
  }

  pub(crate) fn is_registered(&self, id: SubscriberId) -> bool {
    self.entries.iter().any(|entry| entry.id() == id)
  }

  /// Removes the entry for `id`, keeping the remaining entries in subscribe order.
  pub(crate) fn remove(&mut self, id: SubscriberId) -> Option<SubjectEntry<T, F>> {
    let position = self.entries.iter().position(|entry| entry.id() == id)?;
    Some(self.entries.remove(position))
  }
}
