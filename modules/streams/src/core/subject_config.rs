use super::SubscriberRetention;


/// Configuration for [`Subject`](super::Subject).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectConfig {
  retention: SubscriberRetention,
}

impl SubjectConfig {
  /// Creates a configuration with the default retention policy.
  #[must_use]
  pub const fn new() -> Self {
    Self { retention: SubscriberRetention::Retain }
  }

  /// Returns the configured retention policy.
  #[must_use]
  pub const fn retention(&self) -> SubscriberRetention {
    self.retention
  }

  /// Updates the retention policy.
  #[must_use]
  pub const fn with_retention(mut self, retention: SubscriberRetention) -> Self {
    self.retention = retention;
    self
  }
}
