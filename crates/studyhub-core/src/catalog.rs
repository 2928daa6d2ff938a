//! Catalog processing pipeline.
//!
//! Pure functions that join raw catalog records with per-user enrollment
//! state, filter them, and order them for display. Nothing here mutates its
//! input or talks to the network.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::model::{Course, CourseType, Deck, Enrollment, EnrollmentStatus, Quiz};

/// Filter configuration with four independent dimensions. `None` is the
/// wildcard ("all") and always matches.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub language: Option<String>,
    pub difficulty: Option<u8>,
    pub category: Option<String>,
    pub course_type: Option<CourseType>,
}

impl CatalogFilter {
    /// Build a filter from raw selector strings, where a missing value or
    /// the literal `"all"` means wildcard. The difficulty selector is
    /// parsed from its string form; an unparseable value matches nothing
    /// and is mapped to an impossible difficulty.
    pub fn from_selectors(
        language: Option<&str>,
        difficulty: Option<&str>,
        category: Option<&str>,
        course_type: Option<&str>,
    ) -> Self {
        fn selected(raw: Option<&str>) -> Option<String> {
            raw.filter(|s| !s.eq_ignore_ascii_case("all"))
                .map(str::to_string)
        }

        Self {
            language: selected(language),
            difficulty: selected(difficulty).map(|s| s.parse().unwrap_or(u8::MAX)),
            category: selected(category),
            course_type: selected(course_type).and_then(|s| s.parse().ok()),
        }
    }

    /// Logical AND of all four predicates.
    pub fn matches(&self, course: &Course) -> bool {
        let language_ok = self
            .language
            .as_ref()
            .map_or(true, |l| course.language == *l);
        let difficulty_ok = self.difficulty.map_or(true, |d| course.difficulty == Some(d));
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |c| course.category == *c);
        let type_ok = self
            .course_type
            .map_or(true, |t| course.course_type == t);

        language_ok && difficulty_ok && category_ok && type_ok
    }
}

/// Sort criterion for the processed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first; records without a usable timestamp sort as epoch.
    Date,
    /// Most liked first.
    Popularity,
    /// Easiest first; missing difficulty treated as 0.
    Difficulty,
    /// Lexicographic on category.
    Category,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Date
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Popularity => write!(f, "popularity"),
            SortKey::Difficulty => write!(f, "difficulty"),
            SortKey::Category => write!(f, "category"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "popularity" => Ok(SortKey::Popularity),
            "difficulty" => Ok(SortKey::Difficulty),
            "category" => Ok(SortKey::Category),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Apply the filter, then order the survivors by the sort key.
///
/// All sorts are stable: records with equal keys keep their original
/// relative order. The input is never mutated.
pub fn process(courses: &[Course], filter: &CatalogFilter, sort: SortKey) -> Vec<Course> {
    let mut filtered: Vec<Course> = courses
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    match sort {
        SortKey::Date => {
            filtered.sort_by_key(|c| {
                Reverse(c.created_at.map(|t| t.timestamp_millis()).unwrap_or(0))
            });
        }
        SortKey::Popularity => {
            filtered.sort_by_key(|c| Reverse(c.like_count()));
        }
        SortKey::Difficulty => {
            filtered.sort_by_key(|c| c.difficulty.unwrap_or(0));
        }
        SortKey::Category => {
            filtered.sort_by(|a, b| a.category.cmp(&b.category));
        }
    }

    filtered
}

/// The featured subset, newest first. This filter-and-sort step belongs to
/// the rotator's data feed, not the generic pipeline.
pub fn featured(courses: &[Course]) -> Vec<Course> {
    let mut picked: Vec<Course> = courses.iter().filter(|c| c.is_featured).cloned().collect();
    picked.sort_by_key(|c| Reverse(c.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)));
    picked
}

/// Lookup from course id to the user's enrollment status, used to annotate
/// catalog cards. Duplicate course references resolve last-wins in input
/// order; uniqueness is expected to be enforced upstream.
pub fn enrollment_overlay(enrollments: &[Enrollment]) -> HashMap<String, EnrollmentStatus> {
    enrollments
        .iter()
        .map(|e| (e.course_id.clone(), e.status))
        .collect()
}

/// Quizzes filtered by exact difficulty (if given), easiest first. Missing
/// difficulty is treated as level 1.
pub fn quizzes_by_difficulty(quizzes: &[Quiz], difficulty: Option<u8>) -> Vec<Quiz> {
    let mut picked: Vec<Quiz> = quizzes
        .iter()
        .filter(|q| difficulty.map_or(true, |d| q.difficulty == Some(d)))
        .cloned()
        .collect();
    picked.sort_by_key(|q| q.difficulty.unwrap_or(1));
    picked
}

/// Decks ordered easiest first. Missing difficulty is treated as level 1.
pub fn decks_by_difficulty(decks: &[Deck]) -> Vec<Deck> {
    let mut picked = decks.to_vec();
    picked.sort_by_key(|d| d.difficulty.unwrap_or(1));
    picked
}
