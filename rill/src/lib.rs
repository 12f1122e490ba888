// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composable concurrent stream pipelines over bounded channel handoffs.
//!
//! This crate provides a small set of operators for pipeline-style data
//! flow: turn an in-memory sequence into a concurrently-populated [`Flow`],
//! merge, partition, filter and transform flows, and fold a flow into a
//! scalar result — without hand-rolling task-and-channel bookkeeping each
//! time.
//!
//! # Architecture
//!
//! The crate is built around a few key ideas:
//!
//! - **[`Flow<T>`](Flow)**: the single-consumer readable end of a bounded,
//!   single-slot channel. The write end is owned by the background task the
//!   operator spawns and is never exposed.
//! - **One task per operator invocation**: every non-terminal operator
//!   spawns the background work that outlives the call which created it,
//!   with a precise closing contract — no value is written after close, and
//!   a reader drains all buffered values before observing end-of-stream.
//! - **Absent inputs are valid**: every consuming operator accepts
//!   `Option<Flow<T>>` (or a plain `Flow<T>`, which converts). `None`
//!   behaves as an already-closed, empty flow.
//! - **Terminal folds run on the caller**: [`reduce`], [`reduce_default`]
//!   and [`collect`] spawn nothing; they suspend the calling context until
//!   the input closes.
//!
//! ## Operator Catalog
//!
//! | Operator | Kind | Output |
//! |----------|------|--------|
//! | [`stream`] | source | one `Flow` fed from a sequence |
//! | [`join`] | merger | one `Flow` interleaving N inputs |
//! | [`split`] | partitioner | two `Flow`s, routed by predicate |
//! | [`filter`] | transformer | matching values only |
//! | [`map`] / [`remap`] | transformer | one-to-one transformed values |
//! | [`reduce`] / [`reduce_default`] | terminal | the final accumulator |
//! | [`collect`] | terminal | `Option<Vec<T>>` of all values |
//!
//! # Example
//!
//! ```rust
//! use rill::{join, stream};
//!
//! # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
//! # async fn main() {
//! let odds = stream([1, 3, 5]);
//! let evens = stream([2, 4, 6]);
//!
//! let labels = join([odds, evens])
//!     .filter(|n| *n > 2)
//!     .remap(|n| format!("#{n}"))
//!     .collect()
//!     .await;
//!
//! assert_eq!(labels.len(), 4);
//! # }
//! ```
//!
//! # Concurrency Contract
//!
//! Every flow hands values over through a buffer of capacity 1: a writer
//! suspends until the slot frees, a reader suspends until a value arrives
//! or the flow closes. This gives minimal pipelining without unbounded
//! memory growth. Ordering from a single upstream producer is always
//! preserved; interleaving across [`join`]ed producers is not specified.
//!
//! Caller-supplied predicates, transforms and combiners run on the
//! operator's background task. They are trusted to terminate and to leave
//! shared state alone; the crate neither catches panics nor isolates
//! misbehaving callbacks.
//!
//! # Known Limitations
//!
//! There is deliberately no cancellation, no timeout, no error channel and
//! no buffer-size configuration. A pipeline is finished by draining every
//! handle it returned. Dropping a handle undrained is safe — the task
//! feeding it observes the closed channel and exits — but values still in
//! flight are discarded.
//!
//! # Getting Started
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rill = "0.1"
//! tokio = { version = "1.49", features = ["rt"] }
//! ```
//!
//! Operators spawn onto the ambient Tokio runtime, so they must be called
//! from within one. See the individual operator documentation for detailed
//! contracts.

#[macro_use]
mod logging;

pub mod collect;
pub mod filter;
pub mod flow;
pub mod join;
pub mod map;
pub mod reduce;
pub mod split;
pub mod stream;

// Re-export the call surface at the crate root
pub use collect::collect;
pub use filter::filter;
pub use flow::Flow;
pub use join::join;
pub use map::{map, remap};
pub use reduce::{reduce, reduce_default};
pub use split::split;
pub use stream::stream;
