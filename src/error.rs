//! Error types.

use thiserror::Error;

use crate::{color::Component, format::Format};

/// A string that did not have the shape of any supported notation.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("unable to parse {argument} {input:?} as any of {}", list(.attempted))]
pub struct ParseError {
    /// Which argument of the operation failed to parse.
    pub argument: &'static str,
    /// The offending input.
    pub input: String,
    /// Every format that was tried, in order.
    pub attempted: Vec<Format>,
}

fn list(formats: &[Format]) -> String {
    formats
        .iter()
        .map(Format::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors returned by parsing and by the color operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// No notation matched the input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value was outside its allowed domain.
    #[error("{channel} {value} is outside [{min}, {max}]")]
    Range {
        /// Name of the channel or setting.
        channel: &'static str,
        /// The rejected value.
        value: Component,
        /// Smallest allowed value.
        min: Component,
        /// Largest allowed value.
        max: Component,
    },

    /// An unknown format, scheme or mode name.
    #[error("unknown target {0:?}")]
    InvalidTarget(String),

    /// A palette with no candidates was given to the contrast evaluator.
    #[error("no candidate colors to evaluate")]
    EmptyInput,
}

impl Error {
    pub(crate) fn range(channel: &'static str, value: Component, min: Component, max: Component) -> Self {
        Error::Range {
            channel,
            value,
            min,
            max,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
