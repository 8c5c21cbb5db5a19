//! Career and learning guidance attached to a recommendation.

use std::fmt;

use serde::Serialize;

use crate::core::types::Recommendation;

/// Market demand for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Demand {
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Demand::Medium => "Medium",
            Demand::High => "High",
            Demand::VeryHigh => "Very High",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub description: &'static str,
    pub demand: Demand,
    pub skills: &'static [&'static str],
}

pub const CAREER_PATHS: [CareerPath; 5] = [
    CareerPath {
        title: "Front-End Developer (React)",
        description: "Build user interfaces with React components and state management",
        demand: Demand::High,
        skills: &["React", "JavaScript", "CSS", "HTML"],
    },
    CareerPath {
        title: "JavaScript Engineer",
        description: "Focus on complex JavaScript applications and frameworks",
        demand: Demand::High,
        skills: &["ES6+", "React", "Node.js", "TypeScript"],
    },
    CareerPath {
        title: "UI/UX Engineer with React",
        description: "Bridge design and development with React implementations",
        demand: Demand::Medium,
        skills: &["React", "Figma", "CSS", "Design Systems"],
    },
    CareerPath {
        title: "Full Stack Developer",
        description: "React frontend with Node.js/Express backend development",
        demand: Demand::VeryHigh,
        skills: &["React", "Node.js", "Databases", "APIs"],
    },
    CareerPath {
        title: "Mobile Developer (React Native)",
        description: "Cross-platform mobile apps using React Native framework",
        demand: Demand::High,
        skills: &["React Native", "Mobile UX", "APIs", "App Store"],
    },
];

/// Guidance shown with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub headline: &'static str,
    pub next_steps: &'static [&'static str],
    /// Roles to explore; empty when React is not recommended.
    pub careers: &'static [CareerPath],
    /// Other tracks worth considering instead of React.
    pub alternatives: &'static [&'static str],
}

pub fn guidance_for(recommendation: Recommendation) -> Guidance {
    match recommendation {
        Recommendation::Yes => Guidance {
            headline: "You are well positioned to learn React.js.",
            next_steps: &[
                "Work through the official React tutorial and build the tic-tac-toe app",
                "Learn hooks (useState, useEffect) and component composition",
                "Ship a small portfolio project with routing and API data",
            ],
            careers: &CAREER_PATHS,
            alternatives: &[],
        },
        Recommendation::Maybe => Guidance {
            headline: "React.js could work for you with some groundwork first.",
            next_steps: &[
                "Strengthen JavaScript fundamentals: functions, arrays, objects, ES6+ syntax",
                "Build two or three static pages with HTML and CSS",
                "Revisit React once you can write small JavaScript programs unaided",
            ],
            careers: &CAREER_PATHS,
            alternatives: &["Vue.js", "Svelte"],
        },
        Recommendation::No => Guidance {
            headline: "React.js may not be the right next step right now.",
            next_steps: &[
                "Start with an introductory programming course",
                "Explore whether visual, user-facing work motivates you",
                "Retake the assessment after a few months of practice",
            ],
            careers: &[],
            alternatives: &[
                "No-code web builders",
                "UI/UX design",
                "Backend development with Python",
            ],
        },
    }
}
