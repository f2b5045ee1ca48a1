use std::thread;

use super::SpinSyncMutex;
use crate::core::sync::ArcShared;

#[test]
fn try_lock_fails_while_guard_is_alive() {
  let mutex = SpinSyncMutex::new(1_u32);
  let guard = mutex.lock();
  assert!(mutex.try_lock().is_none());
  drop(guard);

  let mut relocked = mutex.try_lock().expect("lock released");
  *relocked += 1;
  drop(relocked);
  assert_eq!(mutex.into_inner(), 2);
}

#[test]
fn lock_serializes_updates_across_threads() {
  let shared = ArcShared::new(SpinSyncMutex::new(0_u64));
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let shared = shared.clone();
      thread::spawn(move || {
        for _ in 0..1_000 {
          *shared.lock() += 1;
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().expect("join");
  }

  assert_eq!(*shared.lock(), 4_000);
}

#[test]
fn default_wraps_default_value() {
  let mutex: SpinSyncMutex<Vec<u8>> = SpinSyncMutex::default();
  assert!(mutex.lock().is_empty());
}
