use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    aliases::AliasRegistry,
    defaults::{DEFAULT_CONTENT_TYPE, DEFAULT_PLURAL_FORMS, DEFAULT_POT_OUTPUT},
    error::{ConfigError, PluralFormsError},
    extractors::{ExtractorDescriptor, ExtractorRegistry},
    plural_forms::{parse_nplurals, parse_plural_expression},
    schema::validate_document,
};

pub const CONFIG_FILE_NAME: &str = ".potxrc.json";

/// The typed shape of a validated configuration document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigDocument {
    pub extract: Option<ExtractSection>,
    pub resolve: Option<ResolveSection>,
    /// Locale code mapped to the catalog file serving it.
    #[serde(default)]
    pub locales: HashMap<String, String>,
}

/// Settings for the extraction command.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExtractSection {
    /// Where the extracted catalog template is written.
    pub output: Option<String>,
    pub headers: Option<HeaderSet>,
}

/// Settings for the resolution command. `locale` is always a non-empty string
/// once validation has passed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolveSection {
    pub locale: String,
}

/// The header pair seeded into generated catalogs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeaderSet {
    #[serde(rename = "content-type")]
    pub content_type: Option<String>,
    #[serde(rename = "plural-forms")]
    pub plural_forms: Option<String>,
}

impl Default for HeaderSet {
    fn default() -> Self {
        Self {
            content_type: Some(DEFAULT_CONTENT_TYPE.to_string()),
            plural_forms: Some(DEFAULT_PLURAL_FORMS.to_string()),
        }
    }
}

/// The validated configuration and the registries its accessors consult.
///
/// Constructed exactly once per run; no accessor mutates stored state, so one
/// instance can be shared across concurrent readers without synchronization.
#[derive(Debug, Clone)]
pub struct Config {
    document: ConfigDocument,
    aliases: AliasRegistry,
    extractors: ExtractorRegistry,
}

impl Config {
    /// Validate and wrap a raw configuration document, using the build's
    /// default registries.
    ///
    /// Validation reports every violation in one aggregated diagnostic; on
    /// failure no instance exists.
    pub fn new(document: Value) -> Result<Self, ConfigError> {
        Self::with_registries(
            document,
            AliasRegistry::default(),
            ExtractorRegistry::default(),
        )
    }

    /// Like [`Config::new`] but with caller-supplied registries.
    pub fn with_registries(
        document: Value,
        aliases: AliasRegistry,
        extractors: ExtractorRegistry,
    ) -> Result<Self, ConfigError> {
        validate_document(&document)?;
        let document: ConfigDocument = serde_json::from_value(document)?;
        Ok(Self {
            document,
            aliases,
            extractors,
        })
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// The short alias registered for a canonical extractor function name.
    pub fn alias_for(&self, function: &str) -> Result<&str, ConfigError> {
        self.aliases.resolve_alias(function)
    }

    /// The extraction plugins to run, in order.
    pub fn extractors(&self) -> &[ExtractorDescriptor] {
        self.extractors.list()
    }

    /// Number of plural categories from the effective plural-forms header.
    pub fn nplurals(&self) -> Result<u32, ConfigError> {
        Ok(parse_nplurals(self.effective_plural_forms()?)?)
    }

    /// Plural selection expression from the effective plural-forms header.
    pub fn plural_form(&self) -> Result<&str, ConfigError> {
        Ok(parse_plural_expression(self.effective_plural_forms()?)?)
    }

    /// Header pair used to seed catalog output: `extract.headers` when given,
    /// otherwise the built-in set.
    pub fn headers(&self) -> HeaderSet {
        self.document
            .extract
            .as_ref()
            .and_then(|extract| extract.headers.clone())
            .unwrap_or_default()
    }

    /// Output path for extraction: `extract.output` or the built-in default.
    pub fn output_filepath(&self) -> &str {
        self.document
            .extract
            .as_ref()
            .and_then(|extract| extract.output.as_deref())
            .unwrap_or(DEFAULT_POT_OUTPUT)
    }

    /// The catalog file mapped to `resolve.locale`.
    ///
    /// Answers `None` when there is no resolve section or the locale has no
    /// entry in `locales`.
    // TODO: report unmapped locales instead of answering None.
    pub fn po_file_path(&self) -> Option<&str> {
        let locale = &self.document.resolve.as_ref()?.locale;
        self.document.locales.get(locale).map(String::as_str)
    }

    /// True iff the document carries an `extract` section. Not exclusive with
    /// resolve mode; single-active-mode policy belongs to the dispatcher.
    pub fn is_extract_mode(&self) -> bool {
        self.document.extract.is_some()
    }

    /// True iff the document carries a `resolve` section.
    pub fn is_resolve_mode(&self) -> bool {
        self.document.resolve.is_some()
    }

    /// The plural-forms header in effect. An explicit headers object without a
    /// `plural-forms` entry is an error rather than a silent fallback.
    fn effective_plural_forms(&self) -> Result<&str, ConfigError> {
        match self
            .document
            .extract
            .as_ref()
            .and_then(|extract| extract.headers.as_ref())
        {
            Some(headers) => headers
                .plural_forms
                .as_deref()
                .ok_or(ConfigError::PluralForms(PluralFormsError::MissingHeader)),
            None => Ok(DEFAULT_PLURAL_FORMS),
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and validate the config file at `path`.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Config::new(document).with_context(|| format!("Invalid config file: {:?}", path))
}

/// Locate the nearest config file above `start_dir` and load it.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let path = find_config_file(start_dir).with_context(|| {
        format!("No {} found above {:?}", CONFIG_FILE_NAME, start_dir)
    })?;
    read_config(&path)
}
