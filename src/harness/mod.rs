use {crate::corpus::CorpusError, thiserror::Error};

pub mod case;
pub mod runner;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("could not write to the report stream")]
    Report(#[from] std::io::Error),
}
