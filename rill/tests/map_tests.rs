// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill::{collect, map, remap, stream, Flow};
use rill_test_utils::test_data::{EVENS, ODDS, ONE_THROUGH_SIX};
use rill_test_utils::{drain_within, expect_closed, DRAIN_TIMEOUT_MS};

#[tokio::test]
async fn test_map_transforms_every_value() {
    // Arrange
    let incremented = map(stream(ODDS), |n| n + 1);

    // Act
    let values = drain_within(incremented, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, EVENS.to_vec());
}

#[tokio::test]
async fn test_map_is_one_to_one_and_ordered() {
    // Arrange
    let identity = map(stream(ONE_THROUGH_SIX), |n| n);

    // Act
    let values = drain_within(identity, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, ONE_THROUGH_SIX.to_vec());
}

#[tokio::test]
async fn test_map_absent_input_closes_empty() {
    // Arrange
    let mut mapped = map(None::<Flow<i32>>, |n| n + 1);

    // Act & Assert
    expect_closed(&mut mapped).await;
}

#[tokio::test]
async fn test_remap_changes_element_type() {
    // Arrange
    let rendered = remap(stream(ONE_THROUGH_SIX), |n| n.to_string());

    // Act
    let values = drain_within(rendered, DRAIN_TIMEOUT_MS).await;

    // Assert
    assert_eq!(values, vec!["1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn test_remap_preserves_length_and_order() {
    // Arrange
    let paired = remap(stream(ONE_THROUGH_SIX), |n| (n, n * n));

    // Act
    let values = drain_within(paired, DRAIN_TIMEOUT_MS).await;

    // Assert - i-th output is the transform of the i-th input
    assert_eq!(values.len(), ONE_THROUGH_SIX.len());
    for (i, (original, squared)) in values.into_iter().enumerate() {
        assert_eq!(original, ONE_THROUGH_SIX[i]);
        assert_eq!(squared, original * original);
    }
}

#[tokio::test]
async fn test_remap_absent_input_closes_empty() {
    // Arrange
    let remapped = remap(None::<Flow<i32>>, |n| n.to_string());

    // Act
    let values = collect(remapped).await;

    // Assert - the output handle itself is present, just empty
    assert_eq!(values, Some(vec![]));
}
