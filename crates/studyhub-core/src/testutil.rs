//! Scriptable `CatalogApi` stub for unit tests in this crate.
//!
//! The full-featured mock lives in `studyhub-client`; this one exists so
//! core tests don't depend on a downstream crate.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::CatalogApi;
use crate::error::ApiError;
use crate::model::{Course, Deck, Enrollment, EnrollmentStatus, Quiz};

#[derive(Default)]
pub(crate) struct StubApi {
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub recommendations: Vec<Course>,
    pub fail_courses: bool,
    pub fail_enrollments: bool,
    pub fail_recommendations: bool,
    /// One-shot scripted outcome for the next `toggle_like` call.
    pub toggle_result: Mutex<Option<Result<Course, ApiError>>>,
    pub recommendation_calls: AtomicU32,
}

impl StubApi {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Self::default()
        }
    }

    pub fn script_toggle(&self, result: Result<Course, ApiError>) {
        *self.toggle_result.lock().unwrap() = Some(result);
    }
}

#[async_trait]
impl CatalogApi for StubApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        if self.fail_courses {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.courses.clone())
    }

    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, ApiError> {
        Ok(self.courses.iter().find(|c| c.id == course_id).cloned())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        if self.fail_enrollments {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.enrollments.clone())
    }

    async fn get_enrollment(&self, course_id: &str) -> Result<Option<Enrollment>, ApiError> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.course_id == course_id)
            .cloned())
    }

    async fn upsert_enrollment(
        &self,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, ApiError> {
        Ok(Enrollment {
            course_id: course_id.to_string(),
            status,
        })
    }

    async fn toggle_like(&self, course_id: &str) -> Result<Course, ApiError> {
        self.toggle_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ApiError::NotFound(format!("course {course_id}"))))
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        Ok(vec![])
    }

    async fn get_quiz(&self, _quiz_id: &str) -> Result<Option<Quiz>, ApiError> {
        Ok(None)
    }

    async fn get_recommendations(&self, _quiz_id: &str) -> Result<Vec<Course>, ApiError> {
        self.recommendation_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_recommendations {
            return Err(ApiError::Network("connection reset".into()));
        }
        Ok(self.recommendations.clone())
    }

    async fn list_decks(&self) -> Result<Vec<Deck>, ApiError> {
        Ok(vec![])
    }

    async fn get_deck(&self, _deck_id: &str) -> Result<Option<Deck>, ApiError> {
        Ok(None)
    }
}

/// Wire-format shorthand used across test modules.
pub(crate) fn course(id: &str) -> Course {
    serde_json::from_str(&format!(r#"{{"_id": "{id}", "title": "{id}"}}"#)).unwrap()
}
