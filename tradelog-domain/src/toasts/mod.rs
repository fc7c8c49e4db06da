// Main module for the toast notification store: types, errors, and the
// service that owns the active stack.

pub mod errors;
pub mod service;
pub mod types;

// Re-exports for easier access by consumers of this submodule or parent
// modules.
pub use errors::ToastError;
pub use service::{DefaultToastService, ToastHandle, ToastService, ToastSnapshot};
pub use types::{DismissReason, Toast, ToastId, ToastInput, ToastVariant};
