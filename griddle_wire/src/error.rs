/// Error for the byte-level wire primitives.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of input: need {need} more bytes, {remaining} remain")]
    UnexpectedEof { need: usize, remaining: usize },
}

pub type Result<T> = core::result::Result<T, WireError>;
