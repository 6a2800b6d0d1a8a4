//! Parsing of the catalog `plural-forms` header.
//!
//! The header has the shape `nplurals=N; plural=(EXPR);` where `N` counts the
//! grammatical plural categories and `EXPR` selects among them. A header that
//! does not match is a hard error for the caller; nothing here repairs or
//! defaults a malformed value.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PluralFormsError;

static NPLURALS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"nplurals ?= ?(\d)").unwrap());

// The expression may span lines, e.g. the three-way Romanian selector.
static PLURAL_EXPRESSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)plural ?=?\((.*)\);").unwrap());

/// The number of plural categories declared by the header.
pub fn parse_nplurals(header: &str) -> Result<u32, PluralFormsError> {
    let captures = NPLURALS_REGEX
        .captures(header)
        .ok_or_else(|| PluralFormsError::MissingNPlurals(header.to_string()))?;
    captures[1]
        .parse()
        .map_err(|_| PluralFormsError::MissingNPlurals(header.to_string()))
}

/// The selection expression declared by the header, without its parentheses.
pub fn parse_plural_expression(header: &str) -> Result<&str, PluralFormsError> {
    PLURAL_EXPRESSION_REGEX
        .captures(header)
        .and_then(|captures| captures.get(1))
        .map(|expression| expression.as_str())
        .ok_or_else(|| PluralFormsError::MissingExpression(header.to_string()))
}
