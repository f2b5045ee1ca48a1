/// Synchronization primitives and shared ownership abstractions.
pub mod sync;
