// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared helpers and fixtures for the rill integration tests.

pub mod helpers;
pub mod test_data;

pub use helpers::{drain_within, expect_closed, expect_next, DRAIN_TIMEOUT_MS};
