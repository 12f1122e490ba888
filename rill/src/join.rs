// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merger: interleaves any number of flows into one.

use crate::flow::{handoff, Flow};

/// Merges `inputs` into a single flow, interleaving values in arrival
/// order.
///
/// # Behavior
///
/// - One forwarding task is spawned per present input. Each reads its
///   input to closure and relays every value into the shared output.
/// - Absent (`None`) inputs are skipped; they contribute no values and no
///   forwarding task.
/// - The output closes only after **every** forwarding task has finished,
///   i.e. after every input has closed. Each forwarder holds a clone of the
///   output's write end, so the last one to exit closes the output — a
///   completion barrier by reference count.
/// - With zero usable inputs the output closes immediately, empty.
///
/// # Guarantees
///
/// - Every value from every input appears exactly once in the output.
/// - Values from the same input keep their relative order.
/// - Relative order between values from *different* inputs is unspecified;
///   it depends on task scheduling.
///
/// # Arguments
///
/// * `inputs` - Anything iterable over flows or optional flows, e.g.
///   `[a, b]`, `vec![Some(a), None, Some(b)]`.
///
/// # Examples
///
/// ```rust
/// use rill::{join, reduce_default, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let odds = stream([1, 3, 5]);
/// let evens = stream([2, 4, 6]);
///
/// let total = reduce_default(join([odds, evens]), |acc, n| acc + n).await;
/// assert_eq!(total, 21);
/// # }
/// ```
pub fn join<T, I>(inputs: I) -> Flow<T>
where
    T: Send + 'static,
    I: IntoIterator,
    I::Item: Into<Option<Flow<T>>>,
{
    let (sender, flow) = handoff();

    for input in inputs {
        let Some(mut input) = input.into() else {
            continue;
        };

        let sender = sender.clone();

        tokio::spawn(async move {
            while let Some(value) = input.recv().await {
                if sender.send(value).await.is_err() {
                    break;
                }
            }

            trace!("join forwarder drained its input");
        });
    }

    // The forwarders hold the remaining clones; once the last of them
    // exits, the output closes. With no forwarders it closes right here.
    drop(sender);

    flow
}
