// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed publish/subscribe event bus for the Strato resource manager.
//!
//! Producers of lifecycle occurrences (registry, bootstrap, task drivers)
//! emit [`SystemEvent`]s without knowing who is listening; consumers
//! subscribe per [`EventKind`] without affecting producers or each other.

pub mod bus;
pub mod events;

pub use bus::{DetachedHandler, EventBus, SyncHandler};
pub use events::{EventKind, SystemEvent};
