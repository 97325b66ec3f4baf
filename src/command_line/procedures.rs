use {
    crate::{
        command_line::arguments::{Arguments, Command},
        corpus::{list_directory, matching::match_fixtures},
        harness::runner,
        scanning,
    },
    anyhow::{bail, Context, Result},
    clap::Parser as _,
    std::io::stdout,
};

pub fn main() -> Result<()> {
    match Arguments::parse().command {
        Command::Run { data_dir } => {
            let summary = runner::run(
                &data_dir.join("raw"),
                &data_dir.join("parsed"),
                &scanning::parse,
                &mut stdout(),
            )
            .context("could not run the conformance suite")?;

            if !summary.success() {
                bail!(
                    "{} of {} conformance cases did not pass",
                    summary.total() - summary.passed,
                    summary.total()
                )
            }

            Ok(())
        }

        Command::Match { data_dir } => {
            let raw_names = list_directory(data_dir.join("raw"))?;
            let parsed_names = list_directory(data_dir.join("parsed"))?;

            let matching = match_fixtures(
                raw_names.iter().map(String::as_str),
                parsed_names.iter().map(String::as_str),
            )
            .context("the fixture corpus is malformed")?;

            for basename in &matching.matched {
                println!("matched: {basename}");
            }
            for basename in matching.raw_only() {
                println!("raw only: {basename}");
            }
            for basename in matching.expected_only() {
                println!("parsed only: {basename}");
            }

            Ok(())
        }
    }
}
