//! Structured lint warnings and per-record results.
//!
//! A [`Warning`] ties a finding to the field (and optionally subfield and
//! occurrence position) that produced it. Warnings are plain data:
//! rendering beyond [`std::fmt::Display`] and [`serde::Serialize`] is the
//! caller's concern.
//!
//! # Display format
//!
//! ```text
//! 245: Must end with . (period).
//! 020: Subfield a has bad checksum, 0123456788.
//! 020[2]: Field is not repeatable.
//! Record ctrl12345: 245: Must end with . (period).
//! ```
//!
//! Positions are 0-based in the data model and 1-based in display.

use crate::record::Record;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Tag of the field the finding applies to (`"LDR"` for the leader)
    pub field: String,
    /// Subfield code, when the finding is scoped to one subfield
    pub subfield: Option<char>,
    /// 0-based occurrence index among same-tag fields, when relevant
    pub position: Option<usize>,
    /// Message text
    pub message: String,
    /// Identifier of the record the finding belongs to
    pub record_id: Option<String>,
}

impl Warning {
    /// Create a field-level warning.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Warning {
            field: field.into(),
            subfield: None,
            position: None,
            message: message.into(),
            record_id: None,
        }
    }

    /// Scope the warning to a subfield code.
    #[must_use]
    pub fn with_subfield(mut self, code: char) -> Self {
        self.subfield = Some(code);
        self
    }

    /// Attach a 0-based occurrence position.
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a record identifier.
    #[must_use]
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.record_id {
            write!(f, "Record {id}: ")?;
        }
        write!(f, "{}", self.field)?;
        if let Some(position) = self.position {
            write!(f, "[{}]", position + 1)?;
        }
        write!(f, ": ")?;
        if let Some(code) = self.subfield {
            write!(f, "Subfield {code} ")?;
        }
        write!(f, "{}", self.message)
    }
}

/// The outcome of validating one record in a batch.
#[derive(Debug, Clone)]
pub struct RecordResult<'a> {
    /// Identifier assigned to the record (001 value or positional index)
    pub record_id: String,
    /// Findings in evaluation order; empty means the record is clean
    pub warnings: Vec<Warning>,
    /// The record that was validated
    pub record: &'a Record,
}

impl RecordResult<'_> {
    /// Whether the record produced no warnings.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Serialize for RecordResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RecordResult", 3)?;
        state.serialize_field("record_id", &self.record_id)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_field_only() {
        let warning = Warning::new("245", "Must end with . (period).");
        assert_eq!(warning.to_string(), "245: Must end with . (period).");
    }

    #[test]
    fn test_display_with_subfield() {
        let warning = Warning::new("020", "has bad checksum.").with_subfield('a');
        assert_eq!(warning.to_string(), "020: Subfield a has bad checksum.");
    }

    #[test]
    fn test_display_with_position_is_one_based() {
        let warning = Warning::new("020", "Field is not repeatable.").at_position(1);
        assert_eq!(warning.to_string(), "020[2]: Field is not repeatable.");

        let warning = Warning::new("020", "Invalid field.").at_position(0);
        assert_eq!(warning.to_string(), "020[1]: Invalid field.");
    }

    #[test]
    fn test_display_with_subfield_and_position() {
        let warning = Warning::new("020", "has bad checksum, 123456789X.")
            .with_subfield('a')
            .at_position(1);
        assert_eq!(
            warning.to_string(),
            "020[2]: Subfield a has bad checksum, 123456789X."
        );
    }

    #[test]
    fn test_display_with_record_id() {
        let warning = Warning::new("245", "Must end with . (period).").with_record_id("ctrl12345");
        let rendered = warning.to_string();
        assert!(rendered.contains("Record ctrl12345"));
        assert!(rendered.contains("245"));
    }

    #[test]
    fn test_json_shape() {
        let warning = Warning::new("020", "has bad checksum.")
            .with_subfield('a')
            .at_position(1);
        let value = serde_json::to_value(&warning).unwrap();
        assert_eq!(value["field"], "020");
        assert_eq!(value["subfield"], "a");
        assert_eq!(value["position"], 1);
        assert_eq!(value["message"], "has bad checksum.");
        assert!(value["record_id"].is_null());
    }

    #[test]
    fn test_record_result_validity_and_json() {
        let record = Record::new("00000nam a2200000 i 4500");
        let clean = RecordResult {
            record_id: "12345".to_string(),
            warnings: vec![],
            record: &record,
        };
        assert!(clean.is_valid());

        let flagged = RecordResult {
            record_id: "12345".to_string(),
            warnings: vec![Warning::new("245", "Test error")],
            record: &record,
        };
        assert!(!flagged.is_valid());

        let value = serde_json::to_value(&flagged).unwrap();
        assert_eq!(value["record_id"], "12345");
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_warning_equality() {
        let a = Warning::new("020", "has bad checksum.").with_subfield('a').at_position(1);
        let b = Warning::new("020", "has bad checksum.").with_subfield('a').at_position(1);
        assert_eq!(a, b);
        assert_ne!(a, Warning::new("245", "has bad checksum.").with_subfield('a'));
    }
}
