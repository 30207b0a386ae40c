// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Naming convention that identifies year-coded imagery layers.
///
/// A title matches when it starts with `prefix`; the year is the text after the
/// prefix up to the next `separator` (if any), trimmed and parsed as an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearConvention {
    prefix: String,
    separator: String,
}

impl YearConvention {
    /// Creates a convention from a title prefix and the separator that follows
    /// the year.
    #[must_use]
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    /// The title prefix, e.g. `"Preserve - "`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses the year out of `title`, if it follows the convention.
    #[must_use]
    pub fn parse_year(&self, title: &str) -> Option<i32> {
        let rest = title.strip_prefix(self.prefix.as_str())?;
        let year = if self.separator.is_empty() {
            rest
        } else {
            rest.split(self.separator.as_str()).next().unwrap_or(rest)
        };
        year.trim().parse().ok()
    }
}

impl Default for YearConvention {
    fn default() -> Self {
        Self::new("Preserve - ", " - ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_year_titles() {
        let c = YearConvention::default();
        assert_eq!(c.parse_year("Preserve - 1994"), Some(1994));
        assert_eq!(c.parse_year("Preserve - 2012 - Color"), Some(2012));
        assert_eq!(c.parse_year("Preserve -  2020 "), Some(2020));
    }

    #[test]
    fn rejects_other_titles() {
        let c = YearConvention::default();
        assert_eq!(c.parse_year("Preserve Boundary"), None);
        assert_eq!(c.parse_year("Imagery Footprints"), None);
        assert_eq!(c.parse_year("Preserve - latest"), None);
        assert_eq!(c.parse_year("Old Preserve - 1994"), None);
    }

    #[test]
    fn custom_prefix_without_separator() {
        let c = YearConvention::new("Ortho ", "");
        assert_eq!(c.parse_year("Ortho 1978"), Some(1978));
        assert_eq!(c.prefix(), "Ortho ");
    }
}
