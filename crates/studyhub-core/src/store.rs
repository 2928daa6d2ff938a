//! Application state store.
//!
//! One `CatalogStore` is owned by the root controller and passed by
//! reference to whatever renders it; there are no ambient globals. The
//! store holds the fetched catalog and the user's enrollments, exposes the
//! derived views, and runs the optimistic like toggle.

use std::collections::{HashMap, HashSet};

use crate::api::CatalogApi;
use crate::catalog::{self, CatalogFilter, SortKey};
use crate::error::{ApiError, StoreError};
use crate::model::{Course, Enrollment, EnrollmentStatus};

pub struct CatalogStore {
    /// Signed-in user id, if any. Drives the local side of the like toggle
    /// and gates enrollment operations.
    user_id: Option<String>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    filter: CatalogFilter,
    sort: SortKey,
    likes_in_flight: HashSet<String>,
}

impl CatalogStore {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id,
            courses: Vec::new(),
            enrollments: Vec::new(),
            filter: CatalogFilter::default(),
            sort: SortKey::default(),
            likes_in_flight: HashSet::new(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Load the catalog and, for a signed-in user, the enrollments, in one
    /// round of concurrent requests.
    ///
    /// A failed course fetch empties the catalog and is returned to the
    /// caller for visible reporting. A failed enrollment fetch only costs
    /// the status badges, so it degrades to an empty overlay with a log
    /// line.
    pub async fn refresh(&mut self, api: &dyn CatalogApi) -> Result<(), ApiError> {
        let (courses, enrollments) = futures::join!(api.list_courses(), async {
            if self.user_id.is_some() {
                api.list_enrollments().await
            } else {
                Ok(Vec::new())
            }
        });

        self.enrollments = match enrollments {
            Ok(enrollments) => enrollments,
            Err(err) => {
                tracing::warn!(error = %err, "enrollment fetch failed, continuing without statuses");
                Vec::new()
            }
        };

        match courses {
            Ok(courses) => {
                self.courses = courses;
                Ok(())
            }
            Err(err) => {
                self.courses = Vec::new();
                Err(err)
            }
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// The filtered, sorted catalog view.
    pub fn processed(&self) -> Vec<Course> {
        catalog::process(&self.courses, &self.filter, self.sort)
    }

    /// The featured rotation feed, newest first.
    pub fn featured(&self) -> Vec<Course> {
        catalog::featured(&self.courses)
    }

    /// Course id → enrollment status, for card annotation.
    pub fn overlay(&self) -> HashMap<String, EnrollmentStatus> {
        catalog::enrollment_overlay(&self.enrollments)
    }

    pub fn status_for(&self, course_id: &str) -> Option<EnrollmentStatus> {
        self.enrollments
            .iter()
            .rev()
            .find(|e| e.course_id == course_id)
            .map(|e| e.status)
    }

    /// Install a server-confirmed replacement record. Unknown ids are
    /// ignored; the catalog is a snapshot, not a cache to grow.
    pub fn replace_course(&mut self, updated: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == updated.id) {
            *existing = updated;
        }
    }

    /// Set the user's status for a course. Not optimistic: the local
    /// enrollment is only updated from the server's response.
    pub async fn set_status(
        &mut self,
        api: &dyn CatalogApi,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, StoreError> {
        if self.user_id.is_none() {
            return Err(StoreError::NotSignedIn);
        }
        let enrollment = api.upsert_enrollment(course_id, status).await?;
        match self
            .enrollments
            .iter_mut()
            .find(|e| e.course_id == enrollment.course_id)
        {
            Some(existing) => *existing = enrollment.clone(),
            None => self.enrollments.push(enrollment.clone()),
        }
        Ok(enrollment)
    }

    /// Phase one of the optimistic like toggle: snapshot the course's like
    /// list and flip the local state immediately. The returned token must
    /// be settled with [`complete_like_toggle`](Self::complete_like_toggle)
    /// once the request resolves.
    ///
    /// Re-entry for a course with an unsettled toggle is rejected rather
    /// than serialized.
    pub fn begin_like_toggle(&mut self, course_id: &str) -> Result<LikeToggle, StoreError> {
        let user_id = self
            .user_id
            .clone()
            .ok_or(StoreError::NotSignedIn)?;
        if self.likes_in_flight.contains(course_id) {
            return Err(StoreError::ToggleInFlight(course_id.to_string()));
        }
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| StoreError::UnknownCourse(course_id.to_string()))?;

        let snapshot = course.likes.clone();
        if let Some(pos) = course.likes.iter().position(|u| *u == user_id) {
            course.likes.remove(pos);
        } else {
            course.likes.push(user_id);
        }

        self.likes_in_flight.insert(course_id.to_string());
        Ok(LikeToggle {
            course_id: course_id.to_string(),
            snapshot,
        })
    }

    /// Phase two: merge the request's outcome. Success installs the
    /// authoritative record; failure restores the like list captured when
    /// this specific toggle was issued, so late completions never revert
    /// against newer state.
    pub fn complete_like_toggle(
        &mut self,
        toggle: LikeToggle,
        outcome: Result<Course, ApiError>,
    ) -> Result<(), StoreError> {
        self.likes_in_flight.remove(&toggle.course_id);
        match outcome {
            Ok(updated) => {
                self.replace_course(updated);
                Ok(())
            }
            Err(err) => {
                if let Some(course) = self.courses.iter_mut().find(|c| c.id == toggle.course_id) {
                    course.likes = toggle.snapshot;
                }
                Err(err.into())
            }
        }
    }

    /// Both phases in one call: flip locally, issue the request, settle.
    pub async fn toggle_like(
        &mut self,
        api: &dyn CatalogApi,
        course_id: &str,
    ) -> Result<(), StoreError> {
        let toggle = self.begin_like_toggle(course_id)?;
        let outcome = api.toggle_like(course_id).await;
        self.complete_like_toggle(toggle, outcome)
    }
}

/// Token for one in-flight like toggle, carrying the issue-time snapshot.
#[derive(Debug)]
pub struct LikeToggle {
    course_id: String,
    snapshot: Vec<String>,
}
