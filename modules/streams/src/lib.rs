#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![cfg_attr(not(test), no_std)]

//! Demand-driven reactive streams.
//!
//! A [`Publisher`](core::Publisher) hands each [`Subscriber`](core::Subscriber) a
//! [`Subscription`](core::Subscription); the subscriber pulls values by requesting
//! [`Demand`](core::Demand) through it and may cancel at any time. Operators such as
//! [`Map`](core::Map) are subscribers upstream and publishers downstream, relaying demand and
//! cancellation in both directions. [`Subject`](core::Subject) multicasts values pushed by external
//! code.
//!
//! Every node is safe to re-enter from within its own callbacks on the same call stack, and
//! serializes its state transitions so it can be driven from several threads.

extern crate alloc;

/// `no_std` protocol, publishers, operators and test harness.
pub mod core;
