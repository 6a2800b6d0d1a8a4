//! Registry of the extraction plugins available in this build.

/// Identifies one extraction plugin.
///
/// The plugin implementations walk source text elsewhere; the interpreter only
/// hands out these references so the extraction command knows what to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorDescriptor {
    /// Canonical name of the function family the plugin extracts.
    pub name: &'static str,
}

/// Extracts plain `gettext("...")` calls.
pub const GETTEXT: ExtractorDescriptor = ExtractorDescriptor { name: "gettext" };

/// Extracts `ngettext("...", "...", n)` calls with plural variants.
pub const NGETTEXT: ExtractorDescriptor = ExtractorDescriptor { name: "ngettext" };

/// Ordered list of extractor plugins; the order defines extraction order.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    extractors: Vec<ExtractorDescriptor>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::from_descriptors([GETTEXT, NGETTEXT])
    }
}

impl ExtractorRegistry {
    pub fn from_descriptors(extractors: impl IntoIterator<Item = ExtractorDescriptor>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    /// The build's extractor list, regardless of document content.
    // TODO: let config documents register additional extractors.
    pub fn list(&self) -> &[ExtractorDescriptor] {
        &self.extractors
    }
}
