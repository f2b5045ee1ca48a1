use alloc::sync::Arc;
use core::ptr;


/// Shared wrapper backed by [`alloc::sync::Arc`].
///
/// Equality is pointer identity: two handles are equal only when they refer to the same allocation.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }

  /// Consumes the shared handle and returns the raw pointer.
  #[must_use]
  pub fn into_raw(self) -> *const T {
    Arc::into_raw(self.0)
  }

  /// Reconstructs the shared handle from a raw pointer.
  ///
  /// # Safety
  ///
  /// The pointer must originate from `ArcShared::into_raw` and must not be reconstructed twice.
  pub unsafe fn from_raw(ptr: *const T) -> Self {
    Self(unsafe { Arc::from_raw(ptr) })
  }

  /// Converts the shared handle into a trait-object representation.
  ///
  /// `cast` must return the very same object it receives, viewed through `U`
  /// (`|value| value as &dyn Trait`).
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(&T) -> &U, {
    let raw = self.into_raw();
    // SAFETY: `raw` came from `into_raw` above and stays alive until it is re-wrapped. The cast only
    // attaches metadata to the same address, which the debug assertion checks.
    unsafe {
      let reference = &*raw;
      let dyn_ptr = ptr::from_ref(cast(reference));
      debug_assert!(ptr::addr_eq(dyn_ptr, raw), "into_dyn cast must not change the object");
      ArcShared::from_raw(dyn_ptr)
    }
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }

  /// Returns the number of strong handles to the allocation.
  #[must_use]
  pub fn strong_count(this: &Self) -> usize {
    Arc::strong_count(&this.0)
  }
}

impl<T: ?Sized> core::ops::Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ArcShared").finish_non_exhaustive()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Self::ptr_eq(self, other)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}
