// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Common fixtures shared across the operator test suites.

pub const ONE_THROUGH_SIX: [i32; 6] = [1, 2, 3, 4, 5, 6];
pub const ODDS: [i32; 3] = [1, 3, 5];
pub const EVENS: [i32; 3] = [2, 4, 6];

pub fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

pub fn sum(acc: i32, value: i32) -> i32 {
    acc + value
}

/// A non-`Copy` payload, for tests that should exercise moved values.
pub fn words() -> Vec<String> {
    ["quick", "brown", "fox"].map(String::from).to_vec()
}
