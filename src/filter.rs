//! Word filtering module
//!
//! Provides the rejection predicate applied to every candidate word, plus
//! the substring search used when specific terms are requested.

/// Filter criteria
///
/// Every field is optional; an absent field constrains nothing. All present
/// constraints must hold simultaneously for a word to pass.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Minimum word length in characters (equal length passes)
    pub min_length: Option<usize>,
    /// Maximum word length in characters (equal length passes)
    pub max_length: Option<usize>,
    /// Required word prefix, matched case-insensitively
    pub start_prefix: Option<String>,
    /// Required word suffix, matched case-insensitively
    pub end_suffix: Option<String>,
    /// Reject words containing decimal digits
    pub exclude_digits: bool,
    /// Lowercase both sides during substring search
    pub case_insensitive: bool,
}

impl FilterCriteria {
    /// Check whether a word should be rejected.
    ///
    /// Returns true when the word fails any active constraint. Note the
    /// inverted polarity: true means the word is dropped.
    #[inline]
    pub fn is_filtered(&self, word: &str) -> bool {
        let word_len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };

        if let Some(min) = self.min_length {
            if word_len < min {
                return true;
            }
        }

        if let Some(max) = self.max_length {
            if word_len > max {
                return true;
            }
        }

        // Prefix and suffix matching ignores case regardless of the
        // case_insensitive flag, which only governs term search.
        if let Some(ref prefix) = self.start_prefix {
            if !word.to_lowercase().starts_with(&prefix.to_lowercase()) {
                return true;
            }
        }

        if let Some(ref suffix) = self.end_suffix {
            if !word.to_lowercase().ends_with(&suffix.to_lowercase()) {
                return true;
            }
        }

        if self.exclude_digits && word.chars().any(|c| c.is_ascii_digit()) {
            return true;
        }

        false
    }

    /// Check whether a word contains at least one of the search terms.
    ///
    /// Terms come comma-split from the raw --word argument; empty terms are
    /// kept as-is and match every word. Case folding applies to this search
    /// only when `case_insensitive` is set.
    pub fn matches_search(&self, word: &str, terms: &[String]) -> bool {
        if self.case_insensitive {
            let word = word.to_lowercase();
            terms.iter().any(|t| word.contains(&t.to_lowercase()))
        } else {
            terms.iter().any(|t| word.contains(t.as_str()))
        }
    }

    /// Check if any constraint is active
    pub fn has_constraints(&self) -> bool {
        self.min_length.is_some()
            || self.max_length.is_some()
            || self.start_prefix.is_some()
            || self.end_suffix.is_some()
            || self.exclude_digits
    }
}
