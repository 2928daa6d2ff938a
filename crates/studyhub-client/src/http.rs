//! HTTP implementation of the `CatalogApi` boundary.
//!
//! Speaks the backend's JSON wire format and attaches the bearer
//! credential to every request when one is configured. A 401-class
//! response surfaces as `ApiError::Unauthorized`; sending the user to the
//! login surface is the caller's job.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use studyhub_core::api::CatalogApi;
use studyhub_core::error::ApiError;
use studyhub_core::model::{Course, Deck, Enrollment, EnrollmentStatus, Quiz};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `CatalogApi` backed by the studyhub REST backend.
pub struct HttpCatalogApi {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(format!("{}{}", self.base_url, path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(format!("{}{}", self.base_url, path)))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        req.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                ApiError::Network(e.to_string())
            }
        })
    }

    /// Map error statuses; 404 handling differs per call site, so it is
    /// not folded in here.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status().as_u16();
        if status == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Unauthorized(body));
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: body,
            });
        }
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.get(path)).await?;
        let response = self.check(response).await?;
        self.parse(response).await
    }

    /// Detail fetch: a 404 is a missing resource, not a failure.
    async fn fetch_detail<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let response = self.send(self.get(path)).await?;
        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        let response = self.check(response).await?;
        Ok(Some(self.parse(response).await?))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsertEnrollmentBody<'a> {
    course_id: &'a str,
    status: EnrollmentStatus,
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.fetch_list("/courses").await
    }

    #[instrument(skip(self))]
    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, ApiError> {
        self.fetch_detail(&format!("/courses/{course_id}")).await
    }

    #[instrument(skip(self))]
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.fetch_list("/enrollments/my-courses").await
    }

    #[instrument(skip(self))]
    async fn get_enrollment(&self, course_id: &str) -> Result<Option<Enrollment>, ApiError> {
        self.fetch_detail(&format!("/enrollments/{course_id}")).await
    }

    #[instrument(skip(self))]
    async fn upsert_enrollment(
        &self,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, ApiError> {
        let body = UpsertEnrollmentBody { course_id, status };
        let response = self.send(self.post("/enrollments").json(&body)).await?;
        let response = self.check(response).await?;
        self.parse(response).await
    }

    #[instrument(skip(self))]
    async fn toggle_like(&self, course_id: &str) -> Result<Course, ApiError> {
        let response = self
            .send(self.post(&format!("/courses/{course_id}/toggle-like")))
            .await?;
        if response.status().as_u16() == 404 {
            return Err(ApiError::NotFound(format!("course {course_id}")));
        }
        let response = self.check(response).await?;
        self.parse(response).await
    }

    #[instrument(skip(self))]
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.fetch_list("/quizzes").await
    }

    #[instrument(skip(self))]
    async fn get_quiz(&self, quiz_id: &str) -> Result<Option<Quiz>, ApiError> {
        self.fetch_detail(&format!("/quizzes/{quiz_id}")).await
    }

    #[instrument(skip(self))]
    async fn get_recommendations(&self, quiz_id: &str) -> Result<Vec<Course>, ApiError> {
        self.fetch_list(&format!("/quizzes/{quiz_id}/recommendations"))
            .await
    }

    #[instrument(skip(self))]
    async fn list_decks(&self) -> Result<Vec<Deck>, ApiError> {
        self.fetch_list("/flashcards").await
    }

    #[instrument(skip(self))]
    async fn get_deck(&self, deck_id: &str) -> Result<Option<Deck>, ApiError> {
        self.fetch_detail(&format!("/flashcards/{deck_id}")).await
    }
}
