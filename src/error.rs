use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions for one suggestion run. A missing match is not an error;
/// the selector reports it as an empty suggestion instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to open the dictionary: {0}")]
    DictOpen(#[source] io::Error),

    #[error("no words were loaded from the dictionary")]
    EmptyDictionary,

    #[error("the query word is empty")]
    EmptyQuery,
}
