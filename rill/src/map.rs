// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transformers: apply a function to every value of a flow.

use crate::flow::{handoff, Flow};

/// Returns a flow with `transform` applied to every value of `input`,
/// keeping the element type.
///
/// Output is one-to-one with input and order-preserving. An absent input
/// yields an immediately-closed, empty output.
///
/// The transform is trusted to be total: a panic inside it unwinds the
/// transforming task and abandons the output without closing it cleanly.
///
/// # Examples
///
/// ```rust
/// use rill::{collect, map, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let incremented = collect(map(stream([1, 3, 5]), |n| n + 1)).await;
/// assert_eq!(incremented, Some(vec![2, 4, 6]));
/// # }
/// ```
pub fn map<T, F>(input: impl Into<Option<Flow<T>>>, transform: F) -> Flow<T>
where
    T: Send + 'static,
    F: FnMut(T) -> T + Send + 'static,
{
    remap(input, transform)
}

/// Returns a flow with `transform` applied to every value of `input`,
/// allowing the element type to change.
///
/// Same contract as [`map`] otherwise.
///
/// # Examples
///
/// ```rust
/// use rill::{collect, remap, stream};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let rendered = collect(remap(stream([1, 2, 3]), |n| n.to_string())).await;
/// assert_eq!(rendered.unwrap(), vec!["1", "2", "3"]);
/// # }
/// ```
pub fn remap<T, U, F>(input: impl Into<Option<Flow<T>>>, mut transform: F) -> Flow<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    let (sender, flow) = handoff();
    let input = input.into();

    tokio::spawn(async move {
        let Some(mut input) = input else {
            return;
        };

        while let Some(value) = input.recv().await {
            if sender.send(transform(value)).await.is_err() {
                break;
            }
        }
    });

    flow
}
