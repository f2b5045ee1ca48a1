#[cfg(test)]
mod tests;

/// Thin wrapper around [`spin::Mutex`].
///
/// Stream nodes never hold a guard while calling into another node; `try_lock` lets a node detect
/// that it is being re-entered instead of spinning on itself forever.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Attempts to lock the mutex without spinning.
  ///
  /// Returns `None` when the lock is currently held, either by another thread or further up the
  /// current call stack.
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, T>> {
    self.0.try_lock()
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SpinSyncMutex<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(&self.0, f)
  }
}
