// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use std::time::Duration;

use futures::{Stream, StreamExt};
use rill::Flow;
use tokio::time::timeout;

/// Generous bound for "this drain must finish"; a healthy pipeline is
/// orders of magnitude faster.
pub const DRAIN_TIMEOUT_MS: u64 = 1_000;

/// Drains `flow` to closure, panicking if it does not close within
/// `timeout_ms`.
///
/// This is the liveness assertion: a flow whose producing task leaked or
/// deadlocked never closes, and the timeout turns that into a test failure
/// instead of a hang.
pub async fn drain_within<T>(flow: Flow<T>, timeout_ms: u64) -> Vec<T> {
    timeout(Duration::from_millis(timeout_ms), flow.collect())
        .await
        .expect("flow did not close within the timeout")
}

/// Expects the next value of `stream` to equal `expected`.
pub async fn expect_next<S>(stream: &mut S, expected: S::Item)
where
    S: Stream + Unpin,
    S::Item: PartialEq + Debug,
{
    let item = stream.next().await.expect("expected another value");
    assert_eq!(item, expected);
}

/// Expects `stream` to be closed: the next poll must yield `None` within
/// the drain timeout.
pub async fn expect_closed<S>(stream: &mut S)
where
    S: Stream + Unpin,
    S::Item: Debug,
{
    let item = timeout(Duration::from_millis(DRAIN_TIMEOUT_MS), stream.next())
        .await
        .expect("stream did not close within the timeout");
    assert!(item.is_none(), "expected closed stream, got {item:?}");
}
