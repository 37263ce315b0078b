use std::{error::Error, io::Error as IoError};

use thiserror::Error;

/// Boxed error of an arbitrary speech backend.
pub type BackendError = Box<dyn Error + Send + Sync + 'static>;

/// Errors, that terminate a single user action (catalog fetch, voice selection or synthesis).
///
/// None of these errors are retried automatically, user has to trigger an action again.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Authentication, network or quota failure on any backend call.
    #[error("Speech backend is unavailable: {0}")]
    BackendUnavailable(#[source] BackendError),

    /// User selection doesn't match any voice or language in the current catalog.
    #[error("Selection \"{0}\" does not match any entry of the voice catalog")]
    SelectionNotFound(String),

    /// Backend reported no voices, so there is nothing to select from.
    #[error("Speech backend reported no voices")]
    EmptyCatalog,

    #[error("Unable to write synthesized audio: {0}")]
    OutputError(#[from] IoError),
}

impl StudioError {
    pub(crate) fn backend<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        StudioError::BackendUnavailable(Box::new(error))
    }
}
