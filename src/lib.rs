//! `marclint` — validate MARC21 bibliographic records against field-level
//! cataloging rules.
//!
//! This crate root wires together the record model, error type, structured
//! warnings, and standard-number checksums and re-exports their public API.

pub mod checksum;
pub mod error;
pub mod record;
pub mod warning;

pub use error::{LintError, Result};
pub use record::{DataField, Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use warning::{RecordResult, Warning};
