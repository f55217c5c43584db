//! Wordlist generation module
//!
//! Expands a seed name list into password candidates: base words are the
//! first token of each line, lowercased, optionally capitalized, then
//! crossed with numeric, year and common symbol suffixes.

use ahash::RandomState;
use chrono::Datelike;
use hashbrown::HashSet;
use std::collections::BTreeSet;

/// Suffixes seen on real-world passwords, in emission order
pub const COMMON_SUFFIXES: [&str; 7] = ["123", "12345", "@123", "!", "@", "#", "$"];

/// How many years back the --add-years window reaches (inclusive of the
/// current year, so a 6-year window in total)
pub const YEAR_WINDOW: i32 = 5;

/// Generation configuration
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Also emit first-letter-capitalized variants of every base word
    pub capitalize: bool,
    /// Inclusive numeric suffix range
    pub number_range: Option<(u64, u64)>,
    /// Append each of the last six years
    pub include_years: bool,
    /// Append the fixed common suffix literals
    pub include_common_suffixes: bool,
}

/// Extract the base word set from raw input lines.
///
/// The base word is the first whitespace-delimited token, lowercased.
/// Duplicates collapse; capitalized variants join the same set so both
/// forms appear in the output.
pub fn base_words(lines: &[String], capitalize: bool) -> BTreeSet<String> {
    let mut words = BTreeSet::new();

    for line in lines {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let word = token.to_lowercase();
        if capitalize {
            words.insert(capitalize_word(&word));
        }
        words.insert(word);
    }

    words
}

/// Uppercase the first character, leave the rest unchanged
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the suffix list in emission order: numbers, years, common literals.
pub fn build_suffixes(config: &GenerateConfig) -> Vec<String> {
    let mut suffixes = Vec::new();

    if let Some((start, end)) = config.number_range {
        for n in start..=end {
            suffixes.push(n.to_string());
        }
    }

    if config.include_years {
        let year = current_year();
        for y in (year - YEAR_WINDOW)..=year {
            suffixes.push(y.to_string());
        }
    }

    if config.include_common_suffixes {
        suffixes.extend(COMMON_SUFFIXES.iter().map(|s| s.to_string()));
    }

    suffixes
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Expand input lines into the final deduplicated word sequence.
///
/// Sorted base words come first, then word-major over the base set and
/// suffix-minor over the suffix list. Overlapping suffix sources (a numeric
/// range covering a year, "123" both as number and literal) collapse.
pub fn expand(lines: &[String], config: &GenerateConfig) -> Vec<String> {
    let words = base_words(lines, config.capitalize);
    let suffixes = build_suffixes(config);

    let mut seen: HashSet<String, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut output = Vec::with_capacity(words.len() * (suffixes.len() + 1));

    for word in &words {
        if seen.insert(word.clone()) {
            output.push(word.clone());
        }
    }

    for word in &words {
        for suffix in &suffixes {
            let candidate = format!("{}{}", word, suffix);
            if seen.insert(candidate.clone()) {
                output.push(candidate);
            }
        }
    }

    log::debug!(
        "expanded {} base words x {} suffixes into {} candidates",
        words.len(),
        suffixes.len(),
        output.len()
    );

    output
}
