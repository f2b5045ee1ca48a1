use super::Completion;

/// Signal waiting in a subject's delivery queue.
pub(crate) enum SubjectSignal<T, F> {
  Value(T),
  Completion(Completion<F>),
}
