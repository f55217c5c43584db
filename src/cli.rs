//! Command-line interface definition for wlist
//!
//! Provides argument parsing and validation for both subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::WlistError;
use crate::filter::FilterCriteria;
use crate::generate::GenerateConfig;

/// Wordlist filter and generator for penetration testing
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wlist",
    author = "m0h1nd4",
    version,
    about = "Wordlist filter and generator for penetration testing",
    long_about = r#"
Filter wordlists by length, prefix/suffix and substring search, or expand a
seed name list into password candidates with numeric, year and symbol
suffixes.

EXAMPLES:
    # Keep words of 8-12 characters without digits
    wlist filter rockyou.txt --min 8 --max 12 --no-num -o filtered.txt

    # Search for words containing admin or root, ignoring case
    wlist filter rockyou.txt -w admin,root --no-case

    # Append to an existing list, skipping words already present
    wlist filter rockyou.txt --start pass -o candidates.txt --check

    # Expand a name list with capitalization and recent years
    wlist generate -i names.txt --capitalize --add-years -o candidates.txt

    # Numeric suffixes 1 through 100 plus common symbol suffixes
    wlist generate -i names.txt --add-numbers 1-100 --add-common-suffixes
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/wlist"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter a wordlist against length, affix and substring criteria
    Filter(FilterArgs),
    /// Expand a name list into password candidates
    Generate(GenerateArgs),
}

/// Arguments for the filter subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// Wordlist file to filter
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Only keep words containing one of these terms (',' to separate)
    #[arg(short = 'w', long, value_name = "TERMS")]
    pub word: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Ignore case during term search
    #[arg(short = 'c', long = "no-case", default_value_t = false)]
    pub no_case: bool,

    /// Sort the wordlist before filtering
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Skip words already present in the output file (slower)
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Minimum word length
    #[arg(long, value_name = "N")]
    pub min: Option<usize>,

    /// Maximum word length
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Match the start of each word
    #[arg(long, value_name = "S")]
    pub start: Option<String>,

    /// Match the end of each word
    #[arg(long, value_name = "S")]
    pub end: Option<String>,

    /// Drop words containing digits
    #[arg(long = "no-num", default_value_t = false)]
    pub no_num: bool,

    /// Silent mode - minimal output, no confirmation prompt
    #[arg(short = 's', long, default_value_t = false, conflicts_with = "verbose")]
    pub silent: bool,

    /// Verbose mode - print every match and timing statistics
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

impl FilterArgs {
    /// Build the rejection criteria from the parsed flags
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_length: self.min,
            max_length: self.max,
            start_prefix: self.start.clone(),
            end_suffix: self.end.clone(),
            exclude_digits: self.no_num,
            case_insensitive: self.no_case,
        }
    }

    /// Split the raw --word argument on commas.
    ///
    /// Terms are taken literally, empty terms included, so the search
    /// semantics stay faithful to the raw input.
    pub fn search_terms(&self) -> Option<Vec<String>> {
        self.word
            .as_ref()
            .map(|raw| raw.split(',').map(str::to_string).collect())
    }
}

/// Arguments for the generate subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Names file to expand
    #[arg(short = 'i', long, value_name = "PATH", default_value = "nepali-names.txt")]
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Also emit capitalized variants
    #[arg(long, default_value_t = false)]
    pub capitalize: bool,

    /// Append numeric suffixes from an inclusive range (e.g. 1-100)
    #[arg(long, value_name = "START-END")]
    pub add_numbers: Option<String>,

    /// Append each of the last six years
    #[arg(long, default_value_t = false)]
    pub add_years: bool,

    /// Append common password suffixes (123, !, @, ...)
    #[arg(long, default_value_t = false)]
    pub add_common_suffixes: bool,

    /// Silent mode - minimal output
    #[arg(short = 's', long, default_value_t = false)]
    pub silent: bool,
}

impl GenerateArgs {
    /// Parse the --add-numbers specification into an inclusive range
    pub fn parse_number_range(&self) -> Result<Option<(u64, u64)>, WlistError> {
        let Some(ref raw) = self.add_numbers else {
            return Ok(None);
        };

        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 2 {
            return Err(WlistError::InvalidRange(raw.clone()));
        }

        let start: u64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| WlistError::InvalidRange(raw.clone()))?;
        let end: u64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| WlistError::InvalidRange(raw.clone()))?;

        if start > end {
            return Err(WlistError::InvalidRange(raw.clone()));
        }

        Ok(Some((start, end)))
    }

    /// Build the generation configuration, validating the numeric range
    pub fn config(&self) -> Result<GenerateConfig, WlistError> {
        Ok(GenerateConfig {
            capitalize: self.capitalize,
            number_range: self.parse_number_range()?,
            include_years: self.add_years,
            include_common_suffixes: self.add_common_suffixes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_args(argv: &[&str]) -> FilterArgs {
        let cli = Cli::parse_from(["wlist", "filter"].iter().copied().chain(argv.iter().copied()));
        match cli.command {
            Commands::Filter(args) => args,
            _ => panic!("expected filter subcommand"),
        }
    }

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli =
            Cli::parse_from(["wlist", "generate"].iter().copied().chain(argv.iter().copied()));
        match cli.command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate subcommand"),
        }
    }

    #[test]
    fn test_filter_criteria_from_args() {
        let args = filter_args(&["words.txt", "--min", "6", "--max", "12", "--no-num"]);
        let criteria = args.criteria();

        assert_eq!(criteria.min_length, Some(6));
        assert_eq!(criteria.max_length, Some(12));
        assert!(criteria.exclude_digits);
        assert!(!criteria.case_insensitive);
        assert!(criteria.start_prefix.is_none());
    }

    #[test]
    fn test_filter_search_terms_split() {
        let args = filter_args(&["words.txt", "-w", "admin,root"]);
        assert_eq!(
            args.search_terms().unwrap(),
            vec!["admin".to_string(), "root".to_string()]
        );
    }

    #[test]
    fn test_filter_search_terms_preserve_empty() {
        let args = filter_args(&["words.txt", "-w", "admin,,root,"]);
        assert_eq!(
            args.search_terms().unwrap(),
            vec!["admin", "", "root", ""]
        );
    }

    #[test]
    fn test_filter_no_terms() {
        let args = filter_args(&["words.txt"]);
        assert!(args.search_terms().is_none());
    }

    #[test]
    fn test_filter_silent_verbose_conflict() {
        let result = Cli::try_parse_from(["wlist", "filter", "words.txt", "-s", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_default_input() {
        let args = generate_args(&[]);
        assert_eq!(args.input, PathBuf::from("nepali-names.txt"));
        assert!(args.out.is_none());
    }

    #[test]
    fn test_parse_number_range() {
        let args = generate_args(&["--add-numbers", "1-100"]);
        assert_eq!(args.parse_number_range().unwrap(), Some((1, 100)));
    }

    #[test]
    fn test_parse_number_range_absent() {
        let args = generate_args(&[]);
        assert_eq!(args.parse_number_range().unwrap(), None);
    }

    #[test]
    fn test_parse_number_range_malformed() {
        for raw in ["1", "1-2-3", "a-5", "5-b", "9-2", ""] {
            let args = generate_args(&["--add-numbers", raw]);
            let err = args.parse_number_range().unwrap_err();
            assert!(matches!(err, WlistError::InvalidRange(_)), "raw: {raw}");
        }
    }

    #[test]
    fn test_generate_config() {
        let args = generate_args(&["--capitalize", "--add-years", "--add-numbers", "2-4"]);
        let config = args.config().unwrap();

        assert!(config.capitalize);
        assert!(config.include_years);
        assert!(!config.include_common_suffixes);
        assert_eq!(config.number_range, Some((2, 4)));
    }
}
