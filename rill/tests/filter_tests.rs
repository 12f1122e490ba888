// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill::{filter, reduce_default, stream, Flow};
use rill_test_utils::test_data::{is_even, sum, words, ONE_THROUGH_SIX};
use rill_test_utils::{drain_within, expect_closed, DRAIN_TIMEOUT_MS};

#[tokio::test]
async fn test_filter_keeps_only_matching_values() {
    // Arrange
    let evens = filter(stream(ONE_THROUGH_SIX), is_even);

    // Act
    let total = reduce_default(evens, sum).await;

    // Assert - 2+4+6
    assert_eq!(total, 12);
}

#[tokio::test]
async fn test_filter_preserves_relative_order() {
    // Arrange
    let evens = filter(stream(ONE_THROUGH_SIX), is_even);

    // Act
    let values = drain_within(evens, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_filter_nothing_matching_closes_empty() {
    // Arrange
    let mut none = filter(stream(ONE_THROUGH_SIX), |_| false);

    // Act & Assert
    expect_closed(&mut none).await;
}

#[tokio::test]
async fn test_filter_everything_matching_passes_through() {
    // Arrange
    let all = filter(stream(ONE_THROUGH_SIX), |_| true);

    // Act
    let values = drain_within(all, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, ONE_THROUGH_SIX.to_vec());
}

#[tokio::test]
async fn test_filter_absent_input_closes_empty() {
    // Arrange
    let mut filtered = filter(None::<Flow<i32>>, is_even);

    // Act & Assert
    expect_closed(&mut filtered).await;
}

#[tokio::test]
async fn test_filter_borrows_non_copy_values() {
    // Arrange
    let long = filter(stream(words()), |word| word.len() == 5);

    // Act
    let values = drain_within(long, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, vec!["quick".to_string(), "brown".to_string()]);
}
