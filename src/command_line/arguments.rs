use {
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the conformance suite over the fixture corpus
    Run {
        /// The directory containing the `raw` and `parsed` fixture directories
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Show which fixtures are paired across the corpus and which are orphaned
    Match {
        /// The directory containing the `raw` and `parsed` fixture directories
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::Arguments;

    #[test]
    fn verify() {
        use clap::CommandFactory as _;
        Arguments::command().debug_assert()
    }
}
