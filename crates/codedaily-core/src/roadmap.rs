//! Rule-based weekly roadmap generator.
//!
//! A pure template-filling function over fixed topic tables. Each track has
//! exactly eight topics; weeks consume a contiguous, advancing slice of the
//! table and fall back to a revision theme once topics run out.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Subject area for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Frontend,
    Backend,
    Dsa,
}

/// Self-reported skill level; controls practice intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

const FRONTEND_TOPICS: [&str; 8] = [
    "HTML fundamentals",
    "CSS layout & Flexbox",
    "Responsive design & media queries",
    "JavaScript basics & DOM",
    "Component-based UI thinking",
    "APIs & data fetching",
    "State management & architecture",
    "Performance & best practices",
];

const BACKEND_TOPICS: [&str; 8] = [
    "HTTP & REST basics",
    "Node.js runtime & npm",
    "Express / routing",
    "Databases & SQL basics",
    "Authentication & security",
    "APIs & documentation",
    "Scaling & caching concepts",
    "Testing & deployment",
];

const DSA_TOPICS: [&str; 8] = [
    "Time & space complexity",
    "Arrays / Strings patterns",
    "Hash maps & sets",
    "Two pointers & sliding window",
    "Recursion & backtracking",
    "Trees & graphs basics",
    "Dynamic programming patterns",
    "Mixed problem sets & contests",
];

/// Theme used for weeks past the end of the topic table.
pub const FALLBACK_THEME: &str = "Mixed revision & project polish";

const FALLBACK_STUDY: &str = "Consolidate previous weeks.";
const REFLECTION_BULLET: &str = "End-of-week reflection: log what felt easy vs confusing.";

impl Track {
    /// Parse user input; anything unrecognized falls back to `Frontend`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" => Track::Backend,
            "dsa" => Track::Dsa,
            _ => Track::Frontend,
        }
    }

    pub fn topics(self) -> &'static [&'static str; 8] {
        match self {
            Track::Frontend => &FRONTEND_TOPICS,
            Track::Backend => &BACKEND_TOPICS,
            Track::Dsa => &DSA_TOPICS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Track::Frontend => "Frontend",
            Track::Backend => "Backend",
            Track::Dsa => "DSA / Problem Solving",
        }
    }
}

impl Level {
    /// Parse user input; anything unrecognized falls back to `Beginner`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Beginner,
        }
    }

    pub fn difficulty_boost(self) -> u32 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// One unit of the generated roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBlock {
    pub week: u32,
    pub theme: String,
    pub bullets: Vec<String>,
}

fn practice_label(intensity: u32) -> &'static str {
    match intensity {
        0 => "Light practice & notes",
        1 => "Daily coding practice",
        2 => "Timed challenges & mini projects",
        _ => "Interview-style questions & revision",
    }
}

/// Generate a `weeks`-long plan for the given track and level.
///
/// `weeks` must be at least 1. The slice of topics assigned to each week
/// advances without wrapping, so plans longer than the topic table end in
/// revision weeks.
pub fn generate(track: Track, level: Level, weeks: u32) -> Result<Vec<WeekBlock>, ValidationError> {
    if weeks == 0 {
        return Err(ValidationError::InvalidValue {
            field: "weeks".into(),
            message: "must be at least 1".into(),
        });
    }

    let topics = track.topics();
    let boost = level.difficulty_boost();
    let topics_per_week =
        ((topics.len() as f64 / f64::from(weeks)).round() as usize).max(1);

    let mut plan = Vec::with_capacity(weeks as usize);
    let mut index = 0usize;
    for week in 1..=weeks {
        let slice: &[&str] = if index < topics.len() {
            &topics[index..(index + topics_per_week).min(topics.len())]
        } else {
            &[]
        };
        index = index.saturating_add(topics_per_week);

        let late_phase = f64::from(week) > 0.7 * f64::from(weeks);
        let intensity = boost + u32::from(late_phase);

        let theme = if slice.is_empty() {
            FALLBACK_THEME.to_string()
        } else {
            slice.join(" \u{2022} ")
        };
        let study = if slice.is_empty() {
            format!("Study: {FALLBACK_STUDY}")
        } else {
            format!("Study: {}", slice.join(", "))
        };

        plan.push(WeekBlock {
            week,
            theme,
            bullets: vec![
                study,
                practice_label(intensity).to_string(),
                REFLECTION_BULLET.to_string(),
            ],
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dsa_beginner_eight_weeks_one_topic_each() {
        let plan = generate(Track::Dsa, Level::Beginner, 8).unwrap();
        assert_eq!(plan.len(), 8);
        for (i, block) in plan.iter().enumerate() {
            assert_eq!(block.week, i as u32 + 1);
            assert_eq!(block.bullets.len(), 3);
            assert_eq!(block.theme, DSA_TOPICS[i]);
        }
        // intensity 0 for weeks 1-5, 1 for weeks 6-8 (6 > 5.6)
        for block in &plan[..5] {
            assert_eq!(block.bullets[1], "Light practice & notes");
        }
        for block in &plan[5..] {
            assert_eq!(block.bullets[1], "Daily coding practice");
        }
    }

    #[test]
    fn unknown_track_falls_back_to_frontend() {
        let plan = generate(Track::from_str_lossy("embedded"), Level::Beginner, 4).unwrap();
        let reference = generate(Track::Frontend, Level::Beginner, 4).unwrap();
        assert_eq!(plan, reference);
    }

    #[test]
    fn long_plans_end_in_revision_weeks() {
        let plan = generate(Track::Frontend, Level::Beginner, 16).unwrap();
        assert_eq!(plan.len(), 16);
        // topics_per_week = max(1, round(8/16)) = 1; weeks 9..16 are empty slices.
        assert_eq!(plan[7].theme, FRONTEND_TOPICS[7]);
        for block in &plan[8..] {
            assert_eq!(block.theme, FALLBACK_THEME);
            assert_eq!(block.bullets[0], "Study: Consolidate previous weeks.");
        }
    }

    #[test]
    fn short_plans_bundle_topics() {
        let plan = generate(Track::Backend, Level::Beginner, 4).unwrap();
        // topics_per_week = round(8/4) = 2
        assert_eq!(
            plan[0].theme,
            format!("{} \u{2022} {}", BACKEND_TOPICS[0], BACKEND_TOPICS[1])
        );
        assert_eq!(
            plan[0].bullets[0],
            format!("Study: {}, {}", BACKEND_TOPICS[0], BACKEND_TOPICS[1])
        );
    }

    #[test]
    fn advanced_late_weeks_hit_the_top_label() {
        let plan = generate(Track::Dsa, Level::Advanced, 8).unwrap();
        assert_eq!(plan[0].bullets[1], "Timed challenges & mini projects");
        assert_eq!(plan[7].bullets[1], "Interview-style questions & revision");
    }

    #[test]
    fn zero_weeks_is_rejected() {
        let err = generate(Track::Frontend, Level::Beginner, 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn level_parsing_is_lossy() {
        assert_eq!(Level::from_str_lossy("Advanced"), Level::Advanced);
        assert_eq!(Level::from_str_lossy("wizard"), Level::Beginner);
        assert_eq!(Track::from_str_lossy("DSA"), Track::Dsa);
    }
}
