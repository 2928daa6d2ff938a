//! In-memory `CatalogApi` for tests and offline development.
//!
//! Unlike the per-test stubs sprinkled through unit tests, this mock
//! actually mutates its state: `toggle_like` flips the configured user in
//! the course's like list and `upsert_enrollment` updates or inserts.
//! Flip `set_failing(true)` to make every operation return a network
//! error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use studyhub_core::api::CatalogApi;
use studyhub_core::error::ApiError;
use studyhub_core::model::{Course, Deck, Enrollment, EnrollmentStatus, Quiz};

pub struct MockCatalogApi {
    user_id: String,
    courses: Mutex<Vec<Course>>,
    enrollments: Mutex<Vec<Enrollment>>,
    quizzes: Mutex<Vec<Quiz>>,
    decks: Mutex<Vec<Deck>>,
    recommendations: Mutex<HashMap<String, Vec<Course>>>,
    failing: AtomicBool,
    call_count: AtomicU32,
}

impl MockCatalogApi {
    /// `user_id` is the identity whose likes `toggle_like` flips.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            courses: Mutex::new(Vec::new()),
            enrollments: Mutex::new(Vec::new()),
            quizzes: Mutex::new(Vec::new()),
            decks: Mutex::new(Vec::new()),
            recommendations: Mutex::new(HashMap::new()),
            failing: AtomicBool::new(false),
            call_count: AtomicU32::new(0),
        }
    }

    pub fn push_course(&self, course: Course) {
        self.courses.lock().unwrap().push(course);
    }

    pub fn push_enrollment(&self, enrollment: Enrollment) {
        self.enrollments.lock().unwrap().push(enrollment);
    }

    pub fn push_quiz(&self, quiz: Quiz) {
        self.quizzes.lock().unwrap().push(quiz);
    }

    pub fn push_deck(&self, deck: Deck) {
        self.decks.lock().unwrap().push(deck);
    }

    pub fn set_recommendations(&self, quiz_id: &str, courses: Vec<Course>) {
        self.recommendations
            .lock()
            .unwrap()
            .insert(quiz_id.to_string(), courses);
    }

    /// When set, every subsequent operation fails with a network error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Total number of API calls made, across all operations.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    fn gate(&self) -> Result<(), ApiError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Network("mock offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.gate()?;
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, ApiError> {
        self.gate()?;
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == course_id)
            .cloned())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.gate()?;
        Ok(self.enrollments.lock().unwrap().clone())
    }

    async fn get_enrollment(&self, course_id: &str) -> Result<Option<Enrollment>, ApiError> {
        self.gate()?;
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.course_id == course_id)
            .cloned())
    }

    async fn upsert_enrollment(
        &self,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, ApiError> {
        self.gate()?;
        let mut enrollments = self.enrollments.lock().unwrap();
        if let Some(existing) = enrollments.iter_mut().find(|e| e.course_id == course_id) {
            existing.status = status;
            return Ok(existing.clone());
        }
        let enrollment = Enrollment {
            course_id: course_id.to_string(),
            status,
        };
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn toggle_like(&self, course_id: &str) -> Result<Course, ApiError> {
        self.gate()?;
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| ApiError::NotFound(format!("course {course_id}")))?;
        if let Some(pos) = course.likes.iter().position(|u| u == &self.user_id) {
            course.likes.remove(pos);
        } else {
            course.likes.push(self.user_id.clone());
        }
        Ok(course.clone())
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.gate()?;
        Ok(self.quizzes.lock().unwrap().clone())
    }

    async fn get_quiz(&self, quiz_id: &str) -> Result<Option<Quiz>, ApiError> {
        self.gate()?;
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == quiz_id)
            .cloned())
    }

    async fn get_recommendations(&self, quiz_id: &str) -> Result<Vec<Course>, ApiError> {
        self.gate()?;
        Ok(self
            .recommendations
            .lock()
            .unwrap()
            .get(quiz_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_decks(&self) -> Result<Vec<Deck>, ApiError> {
        self.gate()?;
        Ok(self.decks.lock().unwrap().clone())
    }

    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, ApiError> {
        self.gate()?;
        Ok(self
            .decks
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == deck_id)
            .cloned())
    }
}
