// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Strato workspace.
//!
//! Provides a mock `CloudApi` with scripted failures and call recording,
//! plus helpers for building task contexts with captured progress reports.

pub mod harness;
pub mod mock_cloud;

pub use harness::{test_account, test_context, ProgressRecorder};
pub use mock_cloud::MockCloudApi;
