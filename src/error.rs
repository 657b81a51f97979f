use crate::hashing::Hash;
use crate::object::ObjectType;

/// Enum intended to represent all the different error types that the object database can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("object {0} does not exist")]
    NotFound(Hash),
    #[error("object is corrupt: {0}")]
    CorruptObject(String),
    #[error("i/o operation error: {0}")]
    IO(#[from] std::io::Error),
    #[error("there was an error with data formatting: {0}")]
    Formatting(String),
    #[error("argument {0:?} is not valid")]
    Arg(String),
    #[error("object {hash} is a {actual}, not a {expected}")]
    UnexpectedKind {
        hash: Hash,
        expected: ObjectType,
        actual: ObjectType,
    },
}

impl Error {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptObject(reason.into())
    }
}

/// Abstraction of the result type where the error is always an Error from this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
