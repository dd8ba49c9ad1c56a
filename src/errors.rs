use thiserror::Error;

/// Returns `T` or a [GrammarError]
pub type Result<T> = std::result::Result<T, GrammarError>;

/// All possible `bunpo_rs` [Error](std::error::Error) paths
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("(-)[bunpo_error::<input>] -> adjective cannot be empty")]
    EmptyInput,
    #[error("(-)[bunpo_error::<form>] -> `{word}` does not end with `{expected}`")]
    InvalidForm { word: String, expected: char },
}
