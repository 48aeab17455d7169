// SPDX-License-Identifier: PMPL-1.0-or-later

//! lang-registry: resolve locale subtags to compact identifiers
//!
//! Looks up language, region, script and currency codes against the
//! compiled-in registry, rewrites legacy tags, and checks the tables.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lang_registry::report::{self, ReportOutputFormat, SubtagKind};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lang-registry")]
#[command(version)]
#[command(about = "Resolve locale subtags to compact numeric identifiers")]
#[command(long_about = None)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve subtag codes of one kind
    Lookup {
        /// Registry to resolve against
        #[arg(value_enum, value_name = "KIND")]
        kind: SubtagKind,

        /// Codes to resolve
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,

        /// Follow alias chains to the current code
        #[arg(short, long)]
        canonical: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Parse whole tags, rewriting legacy forms
    Tag {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Show registry counts and check table invariants
    Verify {
        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Machine-readable output format
    #[arg(short, long, value_enum)]
    format: Option<ReportOutputFormat>,

    /// Write the report to a file (format taken from the extension if not given)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    /// Serializes the report if a format or file was requested. Returns
    /// `false` when the caller should print the console view instead.
    fn emit<R: Serialize>(&self, report: &R) -> Result<bool> {
        let format = match (&self.format, &self.output) {
            (Some(f), _) => *f,
            (None, Some(path)) => match ReportOutputFormat::from_path(path) {
                Some(f) => f,
                None => bail!("cannot infer a report format from {}", path.display()),
            },
            (None, None) => return Ok(false),
        };
        match &self.output {
            Some(path) => {
                format.save(report, path)?;
                println!("Report saved to: {}", path.display());
            }
            None => println!("{}", format.serialize(report)?),
        }
        Ok(true)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lang_registry=debug")
    } else {
        EnvFilter::from_default_env()
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a tracing subscriber is already installed");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Lookup {
            kind,
            codes,
            canonical,
            out,
        } => {
            let report = report::lookup(kind, &codes, canonical);
            if !out.emit(&report)? {
                report::print_lookup(&report);
            }
            if report.failures() > 0 {
                std::process::exit(1);
            }
        }

        Commands::Tag { tags, out } => {
            let report = report::parse_tags(&tags);
            if !out.emit(&report)? {
                report::print_tags(&report);
            }
            if report.failures() > 0 {
                std::process::exit(1);
            }
        }

        Commands::Verify { out } => {
            let report = report::verify();
            if !out.emit(&report)? {
                report::print_verify(&report);
            }
            if !report.defects.is_empty() {
                bail!("{} table defect(s) found", report.defects.len());
            }
        }
    }

    Ok(())
}
