//! MARC bibliographic record structures.
//!
//! This module provides the record types the lint engine operates on:
//! - [`Record`] — leader plus ordered fields
//! - [`Field`] — either a control field (001-009) or a data field
//! - [`DataField`] — tag, indicator pair, ordered subfields
//! - [`Subfield`] — single-character code plus value
//!
//! Fields are stored in a single ordered `Vec`, preserving the order in
//! which they appear in the record. Warning order mirrors field order, so
//! the model never reorders or groups fields by tag. The leader is kept as
//! a raw string: a leader of the wrong length must still be representable
//! so that validation can describe it.
//!
//! # Examples
//!
//! Create a record with the builder API:
//!
//! ```
//! use marclint::{DataField, Record};
//!
//! let record = Record::builder("00000nam a2200000 i 4500")
//!     .control_field("001", "12345")
//!     .control_field("008", "240101s2024    xxu           000 0 eng d")
//!     .field(
//!         DataField::builder("245", '1', '0')
//!             .subfield('a', "Test title.")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.control_field("001"), Some("12345"));
//! assert_eq!(record.fields.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC bibliographic record: leader plus fields in record order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader, normally 24 characters
    pub leader: String,
    /// All fields, control and data interleaved, in record order
    pub fields: Vec<Field>,
}

/// A field in a MARC record.
///
/// Control fields (tags 001-009) carry raw data with no indicators or
/// subfields; data fields (010 and higher) carry an indicator pair and an
/// ordered sequence of subfields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// A control field: tag and raw data
    Control {
        /// Field tag (3 digits, 001-009)
        tag: String,
        /// Raw field data
        data: String,
    },
    /// A data field with indicators and subfields
    Data(DataField),
}

/// A data field in a MARC record (fields 010 and higher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    /// Field tag (3 digits)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields, in field order (`SmallVec` avoids allocation for typical
    /// fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Field {
    /// The field's tag, regardless of kind.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Field::Control { tag, .. } => tag,
            Field::Data(field) => &field.tag,
        }
    }
}

impl Record {
    /// Create an empty record with the given leader.
    #[must_use]
    pub fn new(leader: impl Into<String>) -> Self {
        Record {
            leader: leader.into(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for fluently constructing records.
    #[must_use]
    pub fn builder(leader: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Append a control field.
    pub fn add_control_field(&mut self, tag: impl Into<String>, data: impl Into<String>) {
        self.fields.push(Field::Control {
            tag: tag.into(),
            data: data.into(),
        });
    }

    /// Append a data field.
    pub fn add_field(&mut self, field: DataField) {
        self.fields.push(Field::Data(field));
    }

    /// Value of the first control field with the given tag, if any.
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            Field::Control { tag: t, data } if t == tag => Some(data.as_str()),
            _ => None,
        })
    }

    /// Iterate over all data fields in record order.
    pub fn data_fields(&self) -> impl Iterator<Item = &DataField> {
        self.fields.iter().filter_map(|field| match field {
            Field::Data(data) => Some(data),
            Field::Control { .. } => None,
        })
    }

    /// Iterate over data fields with the given tag, in record order.
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a DataField> + 'a {
        self.data_fields().filter(move |field| field.tag == tag)
    }

    /// Whether any field (control or data) carries the given tag.
    #[must_use]
    pub fn has_field(&self, tag: &str) -> bool {
        self.fields.iter().any(|field| field.tag() == tag)
    }
}

impl DataField {
    /// Create a data field with no subfields.
    #[must_use]
    pub fn new(tag: impl Into<String>, indicator1: char, indicator2: char) -> Self {
        DataField {
            tag: tag.into(),
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for fluently constructing data fields.
    #[must_use]
    pub fn builder(tag: impl Into<String>, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: DataField::new(tag, indicator1, indicator2),
        }
    }

    /// Append a subfield.
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
    }

    /// Value of the first subfield with the given code, if any.
    #[must_use]
    pub fn subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }
}

/// Fluent builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field.
    #[must_use]
    pub fn control_field(mut self, tag: impl Into<String>, data: impl Into<String>) -> Self {
        self.record.add_control_field(tag, data);
        self
    }

    /// Add a data field.
    #[must_use]
    pub fn field(mut self, field: DataField) -> Self {
        self.record.add_field(field);
        self
    }

    /// Finish building the record.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

/// Fluent builder for [`DataField`].
#[derive(Debug)]
pub struct FieldBuilder {
    field: DataField,
}

impl FieldBuilder {
    /// Add a subfield.
    #[must_use]
    pub fn subfield(mut self, code: char, value: impl Into<String>) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Finish building the field.
    #[must_use]
    pub fn build(self) -> DataField {
        self.field
    }
}
