//! Built-in fallbacks used when the configuration document leaves a choice open.

/// Output path for the extracted catalog template when `extract.output` is absent.
pub const DEFAULT_POT_OUTPUT: &str = "messages.pot";

/// Content-type header seeded into generated catalogs.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=UTF-8";

/// Plural-forms header seeded into generated catalogs: two categories,
/// everything but `n == 1` is plural.
pub const DEFAULT_PLURAL_FORMS: &str = "nplurals=2; plural=(n != 1);";

/// Alias table shipped with this build: short user-facing name first,
/// canonical extractor function name second.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[("gt", "gettext"), ("ngt", "ngettext")];
