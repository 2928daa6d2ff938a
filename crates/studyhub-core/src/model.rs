//! Core data model types for studyhub.
//!
//! These are the passive record shapes the rest of the system consumes.
//! They are created and updated server-side; the core only receives
//! snapshots (and replacement records after a server-confirmed mutation).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A course or challenge in the public catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique, stable identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Organisation or person offering the course.
    #[serde(default)]
    pub provider: String,
    /// One-line teaser shown on cards.
    #[serde(default)]
    pub short_description: String,
    /// Full description shown on the detail view.
    #[serde(default)]
    pub description: String,
    /// Free-text category label.
    #[serde(default)]
    pub category: String,
    /// Free-text language label.
    #[serde(default)]
    pub language: String,
    /// Difficulty 1–4; absent sorts as lowest priority.
    #[serde(default)]
    pub difficulty: Option<u8>,
    /// Whether this is a regular course or a challenge.
    #[serde(default)]
    pub course_type: CourseType,
    /// Tags for display.
    #[serde(default)]
    pub tags: Vec<String>,
    /// User ids that liked this course; consumed only via its count.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Creation timestamp; missing or unparseable values are kept as `None`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the course appears in the featured rotation.
    #[serde(default)]
    pub is_featured: bool,
    /// Archived courses are rendered dimmed but stay in the catalog.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// External link to the course itself.
    #[serde(default)]
    pub link: Option<String>,
    /// Editorial highlight, if any.
    #[serde(default)]
    pub editors_pick: Option<EditorsPick>,
}

impl Course {
    /// Number of likes; a missing like collection counts as zero.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Whether the given user id is in the like list.
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|u| u == user_id)
    }
}

/// Editorial highlight attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorsPick {
    pub tag: String,
    #[serde(default)]
    pub comment: String,
}

/// Catalog entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Course,
    Challenge,
}

impl Default for CourseType {
    fn default() -> Self {
        CourseType::Course
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseType::Course => write!(f, "course"),
            CourseType::Challenge => write!(f, "challenge"),
        }
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "course" => Ok(CourseType::Course),
            "challenge" => Ok(CourseType::Challenge),
            other => Err(format!("unknown course type: {other}")),
        }
    }
}

/// A user's personal relationship to one course.
///
/// At most one enrollment per (user, course) pair is assumed; the server
/// enforces that, not this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Referenced course id. The server sometimes populates the reference
    /// into a full course object; both wire shapes are accepted.
    #[serde(deserialize_with = "course_reference")]
    pub course_id: String,
    pub status: EnrollmentStatus,
}

/// Fixed enrollment status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Interested,
    Planning,
    InProgress,
    Completed,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentStatus::Interested => write!(f, "interested"),
            EnrollmentStatus::Planning => write!(f, "planning"),
            EnrollmentStatus::InProgress => write!(f, "in-progress"),
            EnrollmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interested" => Ok(EnrollmentStatus::Interested),
            "planning" => Ok(EnrollmentStatus::Planning),
            "in-progress" | "inprogress" | "in progress" => Ok(EnrollmentStatus::InProgress),
            "completed" => Ok(EnrollmentStatus::Completed),
            other => Err(format!("unknown enrollment status: {other}")),
        }
    }
}

/// A quiz with an ordered question sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "questionText")]
    pub text: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct_answer_index: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub related_courses: Vec<CourseRef>,
}

/// Lightweight course reference used inside quiz questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

/// A flashcard deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "deckTitle")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A single flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

fn default_true() -> bool {
    true
}

/// Accepts a timestamp string, returning `None` when it is missing or does
/// not parse. Records with no usable timestamp sort as the oldest possible.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }))
}

/// Accepts either a bare course id string or a populated course object.
fn course_reference<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reference {
        Id(String),
        Populated {
            #[serde(rename = "_id")]
            id: String,
        },
    }

    match Reference::deserialize(deserializer)? {
        Reference::Id(id) | Reference::Populated { id } => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_and_parse() {
        assert_eq!(EnrollmentStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            "in progress".parse::<EnrollmentStatus>().unwrap(),
            EnrollmentStatus::InProgress
        );
        assert_eq!(
            "Completed".parse::<EnrollmentStatus>().unwrap(),
            EnrollmentStatus::Completed
        );
        assert!("done".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn course_type_display_and_parse() {
        assert_eq!(CourseType::Challenge.to_string(), "challenge");
        assert_eq!("Course".parse::<CourseType>().unwrap(), CourseType::Course);
        assert!("workshop".parse::<CourseType>().is_err());
    }

    #[test]
    fn course_from_wire_format() {
        let json = r#"{
            "_id": "c1",
            "title": "Intro to Rust",
            "provider": "Ferris Academy",
            "category": "Programming",
            "language": "en",
            "difficulty": 2,
            "courseType": "Course",
            "tags": ["rust", "basics"],
            "likes": ["u1", "u2"],
            "createdAt": "2024-03-01T12:00:00Z",
            "isFeatured": true
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c1");
        assert_eq!(course.like_count(), 2);
        assert!(course.liked_by("u1"));
        assert!(!course.liked_by("u3"));
        assert!(course.is_featured);
        assert!(course.is_active);
        assert_eq!(course.difficulty, Some(2));
        assert!(course.created_at.is_some());
    }

    #[test]
    fn course_with_unparseable_timestamp() {
        let json = r#"{"_id": "c2", "title": "T", "createdAt": "not-a-date"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.created_at.is_none());
    }

    #[test]
    fn enrollment_accepts_populated_course_reference() {
        let json = r#"{"courseId": {"_id": "c9", "title": "T"}, "status": "Interested"}"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();
        assert_eq!(enrollment.course_id, "c9");
        assert_eq!(enrollment.status, EnrollmentStatus::Interested);

        let json = r#"{"courseId": "c10", "status": "Completed"}"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();
        assert_eq!(enrollment.course_id, "c10");
    }

    #[test]
    fn question_accepts_question_text_alias() {
        let json = r#"{
            "questionText": "2 + 2?",
            "options": ["3", "4"],
            "correctAnswerIndex": 1,
            "explanation": "Basic arithmetic"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text, "2 + 2?");
        assert_eq!(q.correct_answer_index, 1);
    }

    #[test]
    fn deck_accepts_deck_title_alias() {
        let json = r#"{"_id": "d1", "deckTitle": "Terms", "cards": [{"question": "q", "answer": "a"}]}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.title, "Terms");
        assert_eq!(deck.cards.len(), 1);
    }
}
