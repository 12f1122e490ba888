// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source generator: turns an in-memory sequence into a [`Flow`].

use crate::flow::{handoff, Flow};

/// Returns a flow that delivers `values` in order.
///
/// This is the only leaf producer in the crate; every other operator
/// consumes at least one upstream flow.
///
/// # Behavior
///
/// - Spawns one background task that writes each value, in input order,
///   into the flow, then closes it by exiting.
/// - The flow closes after exactly as many values as the input held. An
///   empty input closes immediately with zero values.
/// - Values are handed over one at a time through the single buffer slot;
///   the task suspends between values until the consumer catches up.
///
/// # Examples
///
/// ```rust
/// use rill::{collect, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let numbers = collect(stream([1, 2, 3])).await;
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
///
/// let empty = collect(stream(Vec::<i32>::new())).await;
/// assert_eq!(empty, Some(vec![]));
/// # }
/// ```
pub fn stream<T, I>(values: I) -> Flow<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: Send + 'static,
{
    let (sender, flow) = handoff();
    let values = values.into_iter();

    tokio::spawn(async move {
        let mut sent = 0usize;

        for value in values {
            if sender.send(value).await.is_err() {
                // Consumer dropped the handle; nobody is listening anymore.
                break;
            }

            sent += 1;
        }

        trace!("source closed after {sent} values");
    });

    flow
}
