//! Errors raised while reading a number from the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("no input available{}", read_cause(.source))]
    InputUnavailable {
        #[source]
        source: Option<io::Error>,
    },

    #[error("no input provided")]
    EmptyInput,

    #[error("Sorry, I didn't understand {input:?}. Please enter a whole number.")]
    InvalidFormat { input: String },

    #[error("Sorry, {input:?} is not allowed. Please enter a number 1 or greater.")]
    OutOfRange { input: String },

    #[error("could not write prompt: {0}")]
    Output(#[source] io::Error),
}

fn read_cause(source: &Option<io::Error>) -> String {
    match source {
        Some(e) => format!(": {}", e),
        None => String::new(),
    }
}

impl PromptError {
    pub(crate) fn unavailable(source: io::Error) -> Self {
        PromptError::InputUnavailable {
            source: Some(source),
        }
    }
}
