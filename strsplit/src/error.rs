use thiserror::Error;

/// Errors raised when constructing a [`StrSplit`](crate::StrSplit).
///
/// Pulling segments never fails; running out of input is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// An empty delimiter matches at every offset without consuming anything.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}
