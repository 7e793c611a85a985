// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task definitions exposed by the key-value plugin.

pub mod bulk;
pub mod keys;
pub mod namespaces;

pub use bulk::{BulkDeleteTask, BulkWriteTask};
pub use keys::{DeleteKeyTask, ReadKeyTask, WriteKeyTask};
pub use namespaces::{DropNamespaceTask, ListNamespacesTask};
