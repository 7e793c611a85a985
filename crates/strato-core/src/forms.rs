// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptive form and table metadata for UI rendering.
//!
//! Plugins expose these schemas so the surrounding application can render
//! create/update forms and list views without knowing anything about the
//! resource kind. The core never interprets the schemas itself.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::StratoError;

/// The input widget kind for a form field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Select,
    Checkbox,
}

/// A single input field in a form schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    /// Machine name, unique within one schema.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl FormField {
    /// A required field with no placeholder or help text.
    pub fn required(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
            placeholder: None,
            help: None,
        }
    }

    /// An optional field with no placeholder or help text.
    pub fn optional(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }
}

/// An ordered set of form fields describing a task or create/update input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Checks that field names are unique within the schema.
    pub fn validate(&self) -> Result<(), StratoError> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(StratoError::Schema(format!(
                    "duplicate field name in form schema: {}",
                    field.name
                )));
            }
        }
        Ok(())
    }
}

/// A column in a resource list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub sortable: bool,
}

impl TableColumn {
    pub fn new(key: &str, label: &str, sortable: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable,
        }
    }
}
