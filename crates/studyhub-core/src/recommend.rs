//! Follow-up course recommendations for a finished quiz.
//!
//! The lookup is keyed by quiz id and requested exactly once per Finished
//! transition. It loads independently of the score view: absence or delay
//! never blocks the result breakdown, and failure degrades to an empty
//! list rather than an error.

use crate::api::CatalogApi;
use crate::model::Course;

/// Fetch-once wrapper around the recommendation lookup.
#[derive(Debug)]
pub struct RecommendationResolver {
    quiz_id: String,
    result: Option<Vec<Course>>,
}

impl RecommendationResolver {
    pub fn new(quiz_id: impl Into<String>) -> Self {
        Self {
            quiz_id: quiz_id.into(),
            result: None,
        }
    }

    /// The recommendations for this quiz. The first call issues the
    /// request; later calls return the cached outcome, so a failed fetch
    /// is not retried.
    pub async fn resolve(&mut self, api: &dyn CatalogApi) -> &[Course] {
        if self.result.is_none() {
            let courses = match api.get_recommendations(&self.quiz_id).await {
                Ok(courses) => courses,
                Err(err) => {
                    tracing::warn!(quiz_id = %self.quiz_id, error = %err, "recommendation fetch failed");
                    Vec::new()
                }
            };
            self.result = Some(courses);
        }
        self.result.as_deref().unwrap_or_default()
    }

    /// Whether the lookup has completed (successfully or not).
    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::testutil::{course, StubApi};

    #[tokio::test]
    async fn fetches_once_and_caches() {
        let api = StubApi {
            recommendations: vec![course("c1"), course("c2")],
            ..StubApi::default()
        };
        let mut resolver = RecommendationResolver::new("quiz-1");
        assert!(!resolver.is_resolved());

        assert_eq!(resolver.resolve(&api).await.len(), 2);
        assert_eq!(resolver.resolve(&api).await.len(), 2);
        assert_eq!(api.recommendation_calls.load(Ordering::Relaxed), 1);
        assert!(resolver.is_resolved());
    }

    #[tokio::test]
    async fn failure_yields_empty_and_is_not_retried() {
        let api = StubApi {
            fail_recommendations: true,
            ..StubApi::default()
        };
        let mut resolver = RecommendationResolver::new("quiz-1");

        assert!(resolver.resolve(&api).await.is_empty());
        assert!(resolver.resolve(&api).await.is_empty());
        assert_eq!(api.recommendation_calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn empty_response_is_an_empty_result() {
        let api = StubApi::default();
        let mut resolver = RecommendationResolver::new("quiz-1");
        assert!(resolver.resolve(&api).await.is_empty());
        assert!(resolver.is_resolved());
    }
}
