// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Partitioner: routes one flow into two by a predicate.

use crate::flow::{handoff, Flow};

/// Splits `input` into a `(matched, unmatched)` pair of flows.
///
/// # Behavior
///
/// - One background task reads the input to closure, evaluates the
///   predicate once per value, and routes each value to exactly one output.
/// - Both outputs close together when the routing task exits; neither
///   outlives the other.
/// - An absent input closes both outputs immediately, empty.
/// - Dropping one output undrained discards the values routed to it; the
///   routing task keeps serving the surviving side.
///
/// Both outputs share the routing task, so they must be consumed
/// concurrently (or one of them dropped): a value waiting in a full output
/// slot suspends routing for both sides.
///
/// # Arguments
///
/// * `input` - The flow to partition, or `None`.
/// * `predicate` - Decides, per value, whether it belongs to the first
///   output. Runs on the routing task; must be safe to call there.
///
/// # Examples
///
/// ```rust
/// use rill::{split, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let (evens, odds) = split(stream(1..=6), |n| n % 2 == 0);
///
/// let (evens, odds) = tokio::join!(evens.collect(), odds.collect());
/// assert_eq!(evens, vec![2, 4, 6]);
/// assert_eq!(odds, vec![1, 3, 5]);
/// # }
/// ```
pub fn split<T, P>(input: impl Into<Option<Flow<T>>>, mut predicate: P) -> (Flow<T>, Flow<T>)
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    let (matched_sender, matched) = handoff();
    let (unmatched_sender, unmatched) = handoff();
    let input = input.into();

    tokio::spawn(async move {
        // Exiting drops both senders, closing both outputs together.
        let Some(mut input) = input else {
            return;
        };

        while let Some(value) = input.recv().await {
            let sender = if predicate(&value) {
                &matched_sender
            } else {
                &unmatched_sender
            };

            // A send fails only when that output was dropped; its values
            // are discarded while the other side keeps receiving.
            let _ = sender.send(value).await;
        }

        trace!("split routed its input to closure");
    });

    (matched, unmatched)
}
