// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drainer: terminal collection of a flow into a `Vec`.

use crate::flow::Flow;

/// Drains `input` into a `Vec`, in arrival order, suspending the caller
/// until the flow closes.
///
/// An absent input returns `None`, which is distinct from `Some(vec![])`:
/// callers can tell "no flow" apart from "a flow that delivered nothing".
/// A present input always returns `Some`, even when empty.
///
/// # Examples
///
/// ```rust
/// use rill::{collect, stream, Flow};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// assert_eq!(collect(None::<Flow<i32>>).await, None);
/// assert_eq!(collect(stream(1..=3)).await, Some(vec![1, 2, 3]));
/// # }
/// ```
pub async fn collect<T>(input: impl Into<Option<Flow<T>>>) -> Option<Vec<T>> {
    match input.into() {
        Some(flow) => Some(flow.collect().await),
        None => None,
    }
}
