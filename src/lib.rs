//! Potx - configuration core for gettext-style message extraction and resolution.
//!
//! Potx interprets the configuration document that drives a translation-catalog
//! pipeline: which extractor plugins run, where the extracted template is written,
//! which plural rules the catalog declares, and which catalog file serves a
//! requested locale.
//!
//! ## Module Structure
//!
//! - `config`: the validated configuration document and its semantic accessors
//! - `schema`: structural validation of raw documents (reports every violation)
//! - `aliases`: alias registry mapping short names to extractor function names
//! - `extractors`: registry of extraction plugins available in this build
//! - `plural_forms`: parsing of the `plural-forms` catalog header
//! - `defaults`: built-in output path, headers, and alias table
//! - `error`: typed error kinds for the whole surface

pub mod aliases;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extractors;
pub mod plural_forms;
pub mod schema;
