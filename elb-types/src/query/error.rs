//! Error type for Query protocol encoding.
use thiserror::Error;

/// An error while turning a request into Query protocol parameters.
///
/// Since encoding goes through serde, this has to support traits that serde expects, such as Display.
#[derive(Error, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum QueryError {
    /// An unknown error occurred inside `serde`.
    #[error("A custom error happened inside Serde: {0}")]
    CustomSerdeError(String),
    /// A member the operation requires was not set. Holds the dotted wire path of the member.
    #[error("Missing required parameter: {0}")]
    MissingRequiredField(String),
    /// The request serialized to something other than a struct, so it has no member names.
    #[error("A request must serialize as a struct")]
    TopLevelNotStruct,
    /// A map was serialized with a key of `None`.
    #[error("Map serializer received a key of None")]
    KeyWasNone,
    /// The serializer received a `()`, which it does not support.
    #[error("Unsupported type: ()")]
    UnsupportedTypeUnit,
    /// The serializer received a byte string, which it does not support.
    #[error("Unsupported type: bytes")]
    UnsupportedTypeBytes,
    /// The serializer received an enum variant carrying data, which it does not support.
    #[error("Unsupported type: enum variant with data ({0})")]
    UnsupportedTypeVariant(&'static str),
}

impl serde::ser::Error for QueryError {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        QueryError::CustomSerdeError(msg.to_string())
    }
}
