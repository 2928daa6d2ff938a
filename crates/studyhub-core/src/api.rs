//! The external API collaborator boundary.
//!
//! The core never performs network I/O itself; everything it needs from the
//! backend goes through this trait. `studyhub-client` provides the HTTP
//! implementation and an in-memory mock.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Course, Deck, Enrollment, EnrollmentStatus, Quiz};

/// Backend operations the core consumes.
///
/// Requests that need the current user's identity carry a bearer credential
/// attached by the implementation; the core neither manages nor inspects it.
/// Detail fetches return `Ok(None)` for missing resources so "not found"
/// stays distinct from a failed fetch.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Full public catalog.
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    /// One course, or `None` if it does not exist.
    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, ApiError>;

    /// The signed-in user's enrollments.
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ApiError>;

    /// The signed-in user's enrollment for one course, if any.
    async fn get_enrollment(&self, course_id: &str) -> Result<Option<Enrollment>, ApiError>;

    /// Create or replace the signed-in user's enrollment for a course.
    async fn upsert_enrollment(
        &self,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, ApiError>;

    /// Toggle the signed-in user's like. Returns the updated course with
    /// the authoritative like list.
    async fn toggle_like(&self, course_id: &str) -> Result<Course, ApiError>;

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError>;

    async fn get_quiz(&self, quiz_id: &str) -> Result<Option<Quiz>, ApiError>;

    /// Bounded list of course suggestions for a completed quiz.
    async fn get_recommendations(&self, quiz_id: &str) -> Result<Vec<Course>, ApiError>;

    async fn list_decks(&self) -> Result<Vec<Deck>, ApiError>;

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, ApiError>;
}
