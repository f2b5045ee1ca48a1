use core::{
  fmt,
  sync::atomic::{AtomicU64, Ordering},
};


static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity assigned to a subscriber when it subscribes.
///
/// Identifiers come from a process-wide counter, so they are unique across subjects and chains and
/// are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
  /// Allocates the next identifier.
  #[must_use]
  pub fn next() -> Self {
    Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }
}

impl fmt::Display for SubscriberId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "subscriber#{}", self.0)
  }
}
