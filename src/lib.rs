//! # wlist
//!
//! Wordlist filtering and generation tool for penetration testing.
//!
//! ## Features
//!
//! - **Filtering**: Keep words by length bounds, prefix/suffix match,
//!   substring search and digit exclusion
//! - **Generation**: Expand a seed name list with capitalization, numeric
//!   suffix ranges, recent-year suffixes and common symbol suffixes
//! - **Append with de-duplication**: Skip candidates already present in the
//!   output file
//! - **Encoding tolerance**: Automatic detection and lossy transcoding of
//!   non-UTF-8 wordlists
//!
//! ## Usage
//!
//! ```bash
//! # Keep words of 8+ characters without digits
//! wlist filter rockyou.txt --min 8 --no-num -o filtered.txt
//!
//! # Search for specific terms, ignoring case
//! wlist filter rockyou.txt -w admin,root --no-case
//!
//! # Expand a name list with years and common suffixes
//! wlist generate -i names.txt --capitalize --add-years --add-common-suffixes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wlist::filter::FilterCriteria;
//!
//! let criteria = FilterCriteria {
//!     min_length: Some(6),
//!     exclude_digits: true,
//!     ..Default::default()
//! };
//!
//! assert!(!criteria.is_filtered("banana"));
//! assert!(criteria.is_filtered("grape1"));
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod generate;
pub mod output;
pub mod processor;
pub mod progress;
pub mod reader;

pub use cli::Cli;
pub use error::WlistError;
pub use filter::FilterCriteria;
pub use generate::GenerateConfig;
pub use processor::{FilterJob, GenerateJob};
