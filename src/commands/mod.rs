//! Command execution for hdrstamp.
//!
//! Routes the parsed CLI to the matching generator operation and reports
//! the result to the user.

use crate::cli::{ArtifactKind, Cli};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::generator;

/// Run the invocation described by `cli` against the system clock.
pub fn dispatch(cli: Cli) -> Result<()> {
    run(cli, &SystemClock)
}

fn run(cli: Cli, clock: &dyn Clock) -> Result<()> {
    let output = cli.output.as_deref();

    match cli.kind {
        ArtifactKind::Date => generator::generate(output, clock)?,
        ArtifactKind::GitVersion => generator::generate_git_version(output, &cli.repo)?,
    }

    if !cli.quiet
        && let Some(path) = output
    {
        println!("Generated {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::GenError;
    use crate::exit_codes;
    use crate::test_support::create_tagged_repo;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hdrstamp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_date_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("build/generated/config.hpp");
        let cli = parse(&["-q", output.to_str().unwrap()]);

        run(cli, &FixedClock::on(2024, 3, 7)).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#pragma once\n#define GENERATED_TIME \"2024-03-07\"\n"
        );
    }

    #[test]
    fn test_run_git_version_artifact() {
        let repo = create_tagged_repo("v2.0.1");
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("git_config.hpp");
        let cli = parse(&[
            "--kind",
            "git-version",
            "--repo",
            repo.path().to_str().unwrap(),
            output.to_str().unwrap(),
        ]);

        run(cli, &FixedClock::on(2024, 3, 7)).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#pragma once\n#define GIT_VERSION \"v2.0.1\"\n"
        );
    }

    #[test]
    fn test_run_missing_output_maps_to_usage_exit_code() {
        let err = run(parse(&[]), &FixedClock::on(2024, 3, 7)).unwrap_err();
        assert!(matches!(err, GenError::MissingArgument));
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn test_run_git_version_outside_repo_maps_to_git_exit_code() {
        let not_repo = TempDir::new().unwrap();
        let output = not_repo.path().join("git_config.hpp");
        let cli = parse(&[
            "--kind",
            "git-version",
            "--repo",
            not_repo.path().to_str().unwrap(),
            output.to_str().unwrap(),
        ]);

        let err = run(cli, &FixedClock::on(2024, 3, 7)).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
        assert!(!output.exists());
    }
}
