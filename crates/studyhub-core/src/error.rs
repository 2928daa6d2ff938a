//! Error taxonomy.
//!
//! Defined in `studyhub-core` so the state store and engines can classify
//! failures without string matching. No failure here is fatal: fetch
//! failures degrade to empty views, mutation failures revert optimistic
//! state, and engine errors leave state unchanged.

use thiserror::Error;

/// Errors from the external API collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The bearer credential was missing or rejected (401-class response).
    /// Redirecting to a login surface is the caller's concern.
    #[error("not authorized: {0}")]
    Unauthorized(String),

    /// A detail fetch addressed a resource that does not exist. Kept
    /// distinct from other failures so the caller can render a dedicated
    /// "not found" view.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// The response arrived but its body did not match the expected wire
    /// format.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Returns `true` for 401-class failures that should send the user to
    /// the login surface.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Errors from the quiz engine and flashcard session.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `advance()` was called with no tentative selection, or an operation
    /// was attempted in the wrong phase. State is left unchanged.
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),

    /// A selected option index is outside the current question's options.
    #[error("option index {index} out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    /// A quiz with no questions cannot be taken.
    #[error("quiz has no questions")]
    EmptyQuiz,

    /// A deck with no cards cannot be studied.
    #[error("deck has no cards")]
    EmptyDeck,
}

/// Errors from state-store operations that combine local state with API
/// calls.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a signed-in user.
    #[error("not signed in")]
    NotSignedIn,

    /// A like toggle for this course is still in flight; re-entry is
    /// rejected rather than serialized.
    #[error("like toggle already in flight for course {0}")]
    ToggleInFlight(String),

    /// The course id is not present in the loaded catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
