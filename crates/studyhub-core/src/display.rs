//! Display attribute tables.
//!
//! Status badges and difficulty accents are tagged-variant mappings through
//! exhaustive matches, so adding an enum variant without extending the
//! table is a compile error rather than a silently unstyled card.

use crate::model::EnrollmentStatus;

/// Visual attributes for an enrollment status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

/// Badge shown on catalog cards annotated by the enrollment overlay.
pub fn status_badge(status: EnrollmentStatus) -> StatusBadge {
    match status {
        EnrollmentStatus::Interested => StatusBadge {
            icon: "☆",
            color: "cyan",
            label: "Interested",
        },
        EnrollmentStatus::Planning => StatusBadge {
            icon: "◷",
            color: "magenta",
            label: "Planned",
        },
        EnrollmentStatus::InProgress => StatusBadge {
            icon: "▶",
            color: "blue",
            label: "In progress",
        },
        EnrollmentStatus::Completed => StatusBadge {
            icon: "✓",
            color: "green",
            label: "Completed",
        },
    }
}

/// Accent color for a difficulty level, 1–4. Anything else (including a
/// missing level) falls back to the neutral accent.
pub fn difficulty_color(difficulty: Option<u8>) -> &'static str {
    match difficulty {
        Some(1) => "green",
        Some(2) => "blue",
        Some(3) => "yellow",
        Some(4) => "red",
        _ => "grey",
    }
}

/// Textual difficulty meter ("●●○○" for level 2 of 4).
pub fn difficulty_meter(difficulty: Option<u8>) -> String {
    let level = difficulty.unwrap_or(0).min(4) as usize;
    let mut meter = String::new();
    for i in 0..4 {
        meter.push(if i < level { '●' } else { '○' });
    }
    meter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_badge() {
        for status in [
            EnrollmentStatus::Interested,
            EnrollmentStatus::Planning,
            EnrollmentStatus::InProgress,
            EnrollmentStatus::Completed,
        ] {
            let badge = status_badge(status);
            assert!(!badge.icon.is_empty());
            assert!(!badge.label.is_empty());
        }
    }

    #[test]
    fn difficulty_colors_follow_the_scale() {
        assert_eq!(difficulty_color(Some(1)), "green");
        assert_eq!(difficulty_color(Some(4)), "red");
        assert_eq!(difficulty_color(Some(9)), "grey");
        assert_eq!(difficulty_color(None), "grey");
    }

    #[test]
    fn difficulty_meter_renders_four_slots() {
        assert_eq!(difficulty_meter(Some(2)), "●●○○");
        assert_eq!(difficulty_meter(None), "○○○○");
        assert_eq!(difficulty_meter(Some(7)), "●●●●");
    }
}
