use alloc::string::{String, ToString};


/// Failure type used throughout protocol tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TestingError {
  /// Generic failure.
  #[error("oops")]
  Oops,
  /// Failure carrying a message.
  #[error("{0}")]
  Message(String),
}

impl From<&str> for TestingError {
  fn from(message: &str) -> Self {
    Self::Message(message.to_string())
  }
}
