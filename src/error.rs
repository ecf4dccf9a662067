use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Pipeline stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TreeBuild,
    Entropy,
    Metrics,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::TreeBuild => "tree construction",
            Stage::Entropy => "entropy",
            Stage::Metrics => "metrics",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum HuffmanError {
    #[error("{stage}: input text is empty")]
    EmptyInput { stage: Stage },

    #[error("encoding: no code for symbol {symbol:?} at position {position}")]
    MissingCode { symbol: char, position: usize },
}
