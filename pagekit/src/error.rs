use alloc::string::String;

/// Contract violations detected by the menu and content components.
///
/// Most entry points treat these as programmer errors and panic with the error message; the
/// `try_*` variants hand them back instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    #[error("no cell registered for identifier `{0}` and its recycle queue is empty")]
    UnregisteredIdentifier(String),
    #[error("index {index} is out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}
