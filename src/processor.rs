//! Core processing engine
//!
//! Runs the two synchronous pipelines: wordlist filtering and name-list
//! expansion. Each job reads its input once, applies the pure core, and
//! hands survivors to the writer.

use bytesize::ByteSize;
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{FilterArgs, GenerateArgs};
use crate::error::WlistError;
use crate::filter::FilterCriteria;
use crate::generate::{expand, GenerateConfig};
use crate::output::{Destination, OutputWriter, write_words};
use crate::progress::{
    confirm_append, create_progress_bar, format_duration, format_number, print_header,
    print_info, print_stat, print_success,
};
use crate::reader::read_word_list;

/// Filtering pipeline for one invocation
pub struct FilterJob {
    wordlist: PathBuf,
    destination: Destination,
    criteria: FilterCriteria,
    terms: Option<Vec<String>>,
    sort: bool,
    check: bool,
    silent: bool,
    verbose: bool,
}

impl FilterJob {
    pub fn from_args(args: &FilterArgs) -> Self {
        Self {
            wordlist: args.wordlist.clone(),
            destination: Destination::from_option(args.out.as_deref()),
            criteria: args.criteria(),
            terms: args.search_terms(),
            sort: args.sort,
            check: args.check,
            silent: args.silent,
            verbose: args.verbose,
        }
    }

    /// Run the filter: load, search, filter, write, report.
    pub fn run(&self) -> anyhow::Result<()> {
        if !self.silent {
            print_header(&format!("Initializing {}", self.wordlist.display()));
        }

        let words = read_word_list(&self.wordlist, self.sort)?;

        if self.verbose {
            let size = fs::metadata(&self.wordlist)?.len();
            print_info(&format!(
                "Loaded {} words ({})",
                format_number(words.len() as u64),
                ByteSize(size)
            ));
            if let Some(ref raw) = self.terms {
                print_info(&format!("Searching for terms: {}", raw.join(", ")));
            }
        }

        // The output file is touched from here on; give the operator a way
        // out unless they asked for silence.
        if let Destination::File(ref path) = self.destination {
            if !self.silent && !confirm_append(&path.display().to_string())? {
                print_info("Answer is no, exiting now..");
                return Ok(());
            }
        }

        if !self.silent {
            print_info("Searching");
        }

        let start_time = Instant::now();

        let survivors: Vec<&str> = match self.terms {
            Some(ref terms) => words
                .iter()
                .filter(|w| self.criteria.matches_search(w, terms))
                .filter(|w| !self.criteria.is_filtered(w))
                .map(String::as_str)
                .collect(),
            None => words
                .iter()
                .filter(|w| !self.criteria.is_filtered(w))
                .map(String::as_str)
                .collect(),
        };

        if self.verbose {
            for word in &survivors {
                print_info(&format!("Found: {}", word));
            }
        }

        let (appended, rejected) =
            write_words(&self.destination, survivors.iter().copied(), self.check)?;

        let elapsed = start_time.elapsed();
        let found = survivors.len() as u64;
        let total_search = match self.terms {
            Some(ref terms) => words.len() as u64 * terms.len() as u64,
            None => words.len() as u64,
        };

        if !self.silent {
            print_stat(&format!(
                "Found: {}\t\tTotal search: {}",
                format_number(found),
                format_number(total_search)
            ));
            if self.destination.is_file() {
                print_info(&format!(
                    "Appended: {}\t\tRejected: {}",
                    format_number(appended),
                    format_number(rejected)
                ));
            }
            if self.verbose {
                print_info(&format!("Time taken: {}", format_duration(elapsed)));
                let secs = elapsed.as_secs_f64();
                if secs > 0.0 {
                    print_info(&format!(
                        "Average speed: {:.2} searches/s",
                        total_search as f64 / secs
                    ));
                }
            }
        }

        log::info!(
            "filter done: {} found of {} searched, {} appended, {} rejected",
            found,
            total_search,
            appended,
            rejected
        );

        Ok(())
    }
}

/// Generation pipeline for one invocation
#[derive(Debug)]
pub struct GenerateJob {
    input: PathBuf,
    destination: Destination,
    config: GenerateConfig,
    silent: bool,
}

impl GenerateJob {
    /// Build the job, validating the numeric range up front
    pub fn from_args(args: &GenerateArgs) -> Result<Self, WlistError> {
        Ok(Self {
            input: args.input.clone(),
            destination: Destination::from_option(args.out.as_deref()),
            config: args.config()?,
            silent: args.silent,
        })
    }

    /// Run the generator: load names, expand, write, report.
    pub fn run(&self) -> anyhow::Result<()> {
        if !self.silent {
            print_header(&format!("Expanding {}", self.input.display()));
        }

        let lines = read_word_list(&self.input, false)?;
        let words = expand(&lines, &self.config);

        // Progress only makes sense when the words are not themselves
        // going to the terminal
        let pb = if self.silent || !self.destination.is_file() {
            indicatif::ProgressBar::hidden()
        } else {
            create_progress_bar(words.len() as u64, "Writing...")
        };

        let mut writer = OutputWriter::open(&self.destination, false)?;
        for word in &words {
            writer.write_word(word)?;
            pb.inc(1);
        }
        writer.flush()?;
        pb.finish_with_message("Complete".green().to_string());

        if !self.silent {
            print_success(&format!(
                "Generated {} words",
                format_number(words.len() as u64)
            ));
            if let Destination::File(ref path) = self.destination {
                print_info(&format!("Output written to: {}", path.display()));
            }
        }

        log::info!("generate done: {} words emitted", words.len());

        Ok(())
    }
}
