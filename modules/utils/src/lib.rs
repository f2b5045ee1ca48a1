#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), no_std)]

//! Runtime-agnostic utilities shared by the backflow crates.
//!
//! Everything here is `no_std` + `alloc` so that stream nodes can serialize their state transitions
//! the same way on embedded targets and on hosted ones.

extern crate alloc;

/// `no_std` building blocks.
pub mod core;
