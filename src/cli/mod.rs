//! CLI argument parsing for hdrstamp.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! work happens in the `commands` module.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// hdrstamp: write a build-time metadata header for a C/C++ build step.
///
/// The generated file looks like:
///
///     #pragma once
///     #define GENERATED_TIME "YYYY-MM-DD"
///
/// Existing files are replaced in full; missing parent directories are created.
#[derive(Parser, Debug)]
#[command(name = "hdrstamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file path for the generated header.
    ///
    /// Optional at the parser level so a missing path is reported with the
    /// generator's own error and exit code.
    pub output: Option<PathBuf>,

    /// Which artifact to generate.
    #[arg(short, long, value_enum, default_value_t = ArtifactKind::Date)]
    pub kind: ArtifactKind,

    /// Repository to describe for `--kind git-version`.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Do not print the generated path on success.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Artifact kinds the generator can produce.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `#define GENERATED_TIME "YYYY-MM-DD"` from the local clock.
    Date,
    /// `#define GIT_VERSION "<git describe --tags>"`.
    GitVersion,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
