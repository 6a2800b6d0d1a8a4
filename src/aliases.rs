//! Alias registry: short user-facing names for extractor function identifiers.

use crate::defaults::BUILTIN_ALIASES;
use crate::error::ConfigError;

/// Ordered table of `(alias, canonical function name)` pairs.
///
/// Built once at process start and handed to the interpreter; lookups never
/// mutate it.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    entries: Vec<(String, String)>,
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::from_entries(
            BUILTIN_ALIASES
                .iter()
                .map(|(alias, function)| (alias.to_string(), function.to_string())),
        )
    }
}

impl AliasRegistry {
    // TODO: feed user-supplied aliases from the config document through here.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Reverse lookup: the first alias whose canonical function name matches.
    ///
    /// The error carries the rendered table so the message shows what was
    /// available.
    pub fn resolve_alias(&self, function: &str) -> Result<&str, ConfigError> {
        self.entries
            .iter()
            .find(|entry| entry.1 == function)
            .map(|entry| entry.0.as_str())
            .ok_or_else(|| ConfigError::AliasNotFound {
                function: function.to_string(),
                table: self.render_table(),
            })
    }

    fn render_table(&self) -> String {
        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(alias, function)| format!("{:?}: {:?}", alias, function))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}
