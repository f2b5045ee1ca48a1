//! Terminal signal types.


/// The single terminal event of a chain.
///
/// A chain delivers at most one completion, always after every value it delivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Completion<F> {
  /// The publisher finished normally.
  Finished,
  /// The publisher terminated with a failure.
  Failed(F),
}

impl<F> Completion<F> {
  /// Returns `true` for normal termination.
  #[must_use]
  pub const fn is_finished(&self) -> bool {
    matches!(self, Self::Finished)
  }

  /// Returns `true` for failed termination.
  #[must_use]
  pub const fn is_failed(&self) -> bool {
    matches!(self, Self::Failed(_))
  }

  /// Returns the failure payload, if any.
  #[must_use]
  pub const fn failure(&self) -> Option<&F> {
    match self {
      | Self::Finished => None,
      | Self::Failed(failure) => Some(failure),
    }
  }

  /// Converts the failure payload, leaving `Finished` untouched.
  #[must_use]
  pub fn map_failure<G, M>(self, mapper: M) -> Completion<G>
  where
    M: FnOnce(F) -> G, {
    match self {
      | Self::Finished => Completion::Finished,
      | Self::Failed(failure) => Completion::Failed(mapper(failure)),
    }
  }

  /// Converts the completion into a `Result`.
  ///
  /// # Errors
  ///
  /// Returns the failure payload of a `Failed` completion.
  pub fn into_result(self) -> Result<(), F> {
    match self {
      | Self::Finished => Ok(()),
      | Self::Failed(failure) => Err(failure),
    }
  }
}

impl<F> From<Result<(), F>> for Completion<F> {
  fn from(result: Result<(), F>) -> Self {
    match result {
      | Ok(()) => Self::Finished,
      | Err(failure) => Self::Failed(failure),
    }
  }
}
