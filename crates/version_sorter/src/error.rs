use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown hyphen mode '{0}', expected 'separator' or 'pre-release'")]
    UnknownHyphenMode(String),
}

/// A batch item the key function could not turn into a version string.
///
/// Only the first failing item is reported. Nothing has been tokenized or
/// moved when this comes back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("item {index}: {source}")]
pub struct KeyError<E> {
    pub index: usize,
    #[source]
    pub source: E,
}
