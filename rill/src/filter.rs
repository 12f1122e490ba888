// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter: keeps the sub-sequence of a flow matching a predicate.

use crate::flow::{handoff, Flow};

/// Returns a flow of the values from `input` for which `predicate` is
/// true, in their original relative order.
///
/// Values failing the predicate are permanently discarded: not buffered,
/// not reported. An absent input yields an immediately-closed, empty
/// output.
///
/// # Examples
///
/// ```rust
/// use rill::{filter, reduce_default, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let evens = filter(stream(1..=6), |n| n % 2 == 0);
/// assert_eq!(reduce_default(evens, |acc, n| acc + n).await, 12);
/// # }
/// ```
pub fn filter<T, P>(input: impl Into<Option<Flow<T>>>, mut predicate: P) -> Flow<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    let (sender, flow) = handoff();
    let input = input.into();

    tokio::spawn(async move {
        let Some(mut input) = input else {
            return;
        };

        while let Some(value) = input.recv().await {
            if !predicate(&value) {
                continue;
            }

            if sender.send(value).await.is_err() {
                break;
            }
        }
    });

    flow
}
