// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The [`Flow`] handle: the readable end of a concurrently-populated stream.
//!
//! Every operator in this crate either produces a `Flow`, consumes one, or
//! both. A `Flow` is backed by a bounded channel with a single buffer slot,
//! so a producing task and its consumer hand values over one at a time: the
//! writer suspends until the slot frees, the reader suspends until a value
//! arrives or the flow closes.
//!
//! ## Lifecycle
//!
//! A flow moves through three states and never back:
//!
//! 1. **Created** — the handle exists; its producing task may not have
//!    started yet.
//! 2. **Running** — the producing task is writing values.
//! 3. **Closed** — the producing task has exited and dropped its write end.
//!    Buffered values are still delivered; after that, [`Flow::recv`]
//!    returns `None` forever.
//!
//! There is no cancellation. A pipeline is finished by draining it; see the
//! crate-level documentation for the implications of abandoning one.

use core::fmt::Debug;
use core::pin::Pin;
use core::task::{Context, Poll};

use async_channel::Sender;
use futures::Stream;

/// The readable end of a concurrently-populated sequence of values.
///
/// Obtained from [`stream`](crate::stream) or from any non-terminal
/// operator. A `Flow` is single-consumer: it is not `Clone`, and receiving
/// takes `&mut self`. The write end is owned by the background task that
/// populates the flow and is never exposed.
///
/// `Flow` implements [`futures::Stream`], so it composes with the wider
/// async ecosystem once it leaves this crate's operators.
///
/// # Examples
///
/// ```rust
/// use rill::stream;
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let doubled = stream(1..=3)
///     .map(|n| n * 2)
///     .collect()
///     .await;
///
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub struct Flow<T> {
    // Boxed and pinned: the receiver holds a pinned event listener and is
    // not `Unpin`, while `Flow` itself must stay `Unpin` for consumers.
    receiver: Pin<Box<async_channel::Receiver<T>>>,
}

/// Creates a connected write/read pair with a single-slot handoff buffer.
///
/// A send suspends until the slot is free; a receive suspends until a value
/// is buffered or every sender has been dropped. Closing is a consequence
/// of dropping the senders, which keeps "close exactly once, after all
/// writers finished" a structural property rather than a protocol the
/// operators have to follow.
pub(crate) fn handoff<T>() -> (Sender<T>, Flow<T>) {
    let (sender, receiver) = async_channel::bounded(1);

    (
        sender,
        Flow {
            receiver: Box::pin(receiver),
        },
    )
}

impl<T> Flow<T> {
    /// Receives the next value, suspending until one arrives.
    ///
    /// Returns `None` once the flow has closed and every previously-written
    /// value has been drained. Closing signals "no more values", never
    /// "discard pending values".
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await.ok()
    }

    /// Folds this flow into a single value; see [`reduce`](crate::reduce).
    pub async fn reduce<F>(self, seed: T, combine: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        crate::reduce(self, seed, combine).await
    }

    /// Folds this flow starting from `T::default()`; see
    /// [`reduce_default`](crate::reduce_default).
    pub async fn reduce_default<F>(self, combine: F) -> T
    where
        T: Default,
        F: FnMut(T, T) -> T,
    {
        crate::reduce_default(self, combine).await
    }

    /// Drains this flow into a `Vec`, in arrival order.
    ///
    /// Suspends the caller until the flow closes. The result is always
    /// present, even when zero values arrived; only the free-function form
    /// [`collect`](crate::collect) distinguishes an absent input.
    pub async fn collect(mut self) -> Vec<T> {
        let mut values = Vec::new();

        while let Some(value) = self.recv().await {
            values.push(value);
        }

        values
    }
}

impl<T: Send + 'static> Flow<T> {
    /// Splits this flow in two by a predicate; see [`split`](crate::split).
    pub fn split<P>(self, predicate: P) -> (Flow<T>, Flow<T>)
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        crate::split(self, predicate)
    }

    /// Keeps only values matching `predicate`; see
    /// [`filter`](crate::filter).
    pub fn filter<P>(self, predicate: P) -> Flow<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        crate::filter(self, predicate)
    }

    /// Transforms every value, keeping the element type; see
    /// [`map`](crate::map).
    pub fn map<F>(self, transform: F) -> Flow<T>
    where
        F: FnMut(T) -> T + Send + 'static,
    {
        crate::map(self, transform)
    }

    /// Transforms every value into a possibly different element type; see
    /// [`remap`](crate::remap).
    pub fn remap<U, F>(self, transform: F) -> Flow<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        crate::remap(self, transform)
    }
}

impl<T> Stream for Flow<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.receiver.len(), None)
    }
}

impl<T> Debug for Flow<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Flow")
            .field("buffered", &self.receiver.len())
            .field("closed", &self.receiver.is_closed())
            .finish()
    }
}
