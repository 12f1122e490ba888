// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Folders: terminal left folds over a flow.

use crate::flow::Flow;

/// Left-folds `input` into `seed` with `combine`, suspending the caller
/// until the flow closes.
///
/// No background task is spawned; the fold runs entirely on the calling
/// context. Values are combined in the order they are observed. An absent
/// input returns `seed` unchanged, immediately.
///
/// # Examples
///
/// ```rust
/// use rill::{reduce, stream, Flow};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let sum = |acc, n| acc + n;
///
/// assert_eq!(reduce(None::<Flow<i32>>, 42, sum).await, 42);
/// assert_eq!(reduce(stream(1..=6), 21, sum).await, 42);
/// # }
/// ```
pub async fn reduce<T, F>(input: impl Into<Option<Flow<T>>>, seed: T, mut combine: F) -> T
where
    F: FnMut(T, T) -> T,
{
    let Some(mut input) = input.into() else {
        return seed;
    };

    let mut acc = seed;

    while let Some(value) = input.recv().await {
        acc = combine(acc, value);
    }

    acc
}

/// Left-folds `input` starting from `T::default()`.
///
/// Same contract as [`reduce`]; an absent input returns the default value.
pub async fn reduce_default<T, F>(input: impl Into<Option<Flow<T>>>, combine: F) -> T
where
    T: Default,
    F: FnMut(T, T) -> T,
{
    reduce(input, T::default(), combine).await
}
