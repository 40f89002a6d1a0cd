//! Static quiz data: variants, category descriptors, questions, and the
//! hybrid-career combination table.
//!
//! Option `i` of every question maps to category `i` of its variant, so the
//! category list doubles as the option → category table.

use serde::{Deserialize, Serialize};

/// Which quiz the user took. Each variant has its own category set and questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizVariant {
    #[default]
    Career,
    Leadership,
}

impl QuizVariant {
    pub fn categories(self) -> &'static [CareerCategory; 4] {
        match self {
            QuizVariant::Career => &CAREER_CATEGORIES,
            QuizVariant::Leadership => &LEADERSHIP_CATEGORIES,
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            QuizVariant::Career => CAREER_QUESTIONS,
            QuizVariant::Leadership => LEADERSHIP_QUESTIONS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuizVariant::Career => "career",
            QuizVariant::Leadership => "leadership",
        }
    }

    /// Parses a path segment such as `career` or `Leadership`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "career" => Some(QuizVariant::Career),
            "leadership" => Some(QuizVariant::Leadership),
            _ => None,
        }
    }
}

/// Static descriptor for one quiz category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerCategory {
    /// Lower-case lookup key, e.g. `analytical`.
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
}

/// A multiple-choice question with exactly four options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

impl Question {
    /// Returns the option index for a selected answer, if it is one of the options.
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        self.options
            .iter()
            .position(|opt| *opt == answer)
            .or_else(|| {
                self.options
                    .iter()
                    .position(|opt| opt.eq_ignore_ascii_case(answer))
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career variant
// ────────────────────────────────────────────────────────────────────────────

pub static CAREER_CATEGORIES: [CareerCategory; 4] = [
    CareerCategory {
        key: "analytical",
        name: "Analytical",
        color: "#4F86F7",
        description: "You enjoy breaking problems down, working with data, and finding logical answers.",
        careers: &[
            "Data Scientist",
            "Software Engineer",
            "Financial Analyst",
            "Research Scientist",
            "Actuary",
        ],
    },
    CareerCategory {
        key: "creative",
        name: "Creative",
        color: "#F76C9B",
        description: "You think in ideas and images and like making things that did not exist before.",
        careers: &[
            "Graphic Designer",
            "UX Designer",
            "Writer",
            "Architect",
            "Marketing Creative",
        ],
    },
    CareerCategory {
        key: "social",
        name: "Social",
        color: "#F7B84F",
        description: "You are energised by people and like helping, teaching, and bringing others together.",
        careers: &[
            "Teacher",
            "Counselor",
            "Nurse",
            "Human Resources Specialist",
            "Social Worker",
        ],
    },
    CareerCategory {
        key: "practical",
        name: "Practical",
        color: "#4FD18B",
        description: "You like hands-on work, clear results, and building or fixing real things.",
        careers: &[
            "Mechanical Engineer",
            "Electrician",
            "Project Manager",
            "Lab Technician",
            "Civil Engineer",
        ],
    },
];

pub const CAREER_QUESTIONS: &[Question] = &[
    Question {
        prompt: "How do you prefer to spend a free afternoon?",
        options: [
            "Solving a puzzle or strategy game",
            "Drawing, writing, or making music",
            "Meeting up with friends",
            "Building or repairing something",
        ],
    },
    Question {
        prompt: "Which school subject did you enjoy most?",
        options: ["Mathematics", "Art", "Social Studies", "Shop or Technology"],
    },
    Question {
        prompt: "When working on a group project, you usually...",
        options: [
            "Research and analyse the details",
            "Come up with original ideas",
            "Keep the team motivated and connected",
            "Organise tasks and get things done",
        ],
    },
    Question {
        prompt: "Which work environment appeals to you most?",
        options: [
            "A lab or quiet office",
            "A studio",
            "A busy community space",
            "A workshop or outdoor site",
        ],
    },
    Question {
        prompt: "How do you approach a new problem?",
        options: [
            "Gather data and look for patterns",
            "Imagine several unusual solutions",
            "Talk it through with others",
            "Try a fix and adjust as I go",
        ],
    },
    Question {
        prompt: "What kind of praise means the most to you?",
        options: [
            "That was a smart solution",
            "That was really original",
            "You made a difference for me",
            "That works perfectly",
        ],
    },
    Question {
        prompt: "Which book or show would you pick?",
        options: [
            "A documentary about science",
            "A fantasy epic",
            "A drama about relationships",
            "A how-to or makeover show",
        ],
    },
    Question {
        prompt: "What would you most like to learn next?",
        options: [
            "Programming or statistics",
            "Photography or design",
            "Psychology or languages",
            "Carpentry or electronics",
        ],
    },
    Question {
        prompt: "How do you make important decisions?",
        options: [
            "Weigh the pros and cons logically",
            "Follow my intuition",
            "Consider how it affects others",
            "Choose what is most workable",
        ],
    },
    Question {
        prompt: "Which achievement would make you proudest?",
        options: [
            "Discovering something new",
            "Creating a work others admire",
            "Helping someone change their life",
            "Completing a tangible project",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Leadership variant
// ────────────────────────────────────────────────────────────────────────────

pub static LEADERSHIP_CATEGORIES: [CareerCategory; 4] = [
    CareerCategory {
        key: "transformational",
        name: "Transformational",
        color: "#8E5CF7",
        description: "You inspire people with a vision and push the group toward change.",
        careers: &[
            "Startup Founder",
            "Product Manager",
            "Nonprofit Director",
            "Innovation Consultant",
        ],
    },
    CareerCategory {
        key: "servant",
        name: "Servant",
        color: "#4FC3F7",
        description: "You lead by supporting others and putting the team's growth first.",
        careers: &[
            "Community Organizer",
            "School Principal",
            "Healthcare Administrator",
            "Team Coach",
        ],
    },
    CareerCategory {
        key: "situational",
        name: "Situational",
        color: "#F7A24F",
        description: "You read the room and adapt your style to what each moment needs.",
        careers: &[
            "Management Consultant",
            "Operations Manager",
            "Emergency Coordinator",
            "Account Manager",
        ],
    },
    CareerCategory {
        key: "directive",
        name: "Directive",
        color: "#E0524F",
        description: "You set clear goals and structure and make decisions quickly.",
        careers: &[
            "Military Officer",
            "Construction Manager",
            "Sales Director",
            "Production Supervisor",
        ],
    },
];

pub const LEADERSHIP_QUESTIONS: &[Question] = &[
    Question {
        prompt: "Your team is stuck. What do you do first?",
        options: [
            "Remind everyone of the bigger goal",
            "Ask each person what they need",
            "Assess the situation before acting",
            "Assign clear next steps",
        ],
    },
    Question {
        prompt: "How would your friends describe you in a group?",
        options: ["Inspiring", "Supportive", "Flexible", "Decisive"],
    },
    Question {
        prompt: "A new member joins your club. You...",
        options: [
            "Share the club's vision with them",
            "Make sure they feel welcome",
            "Figure out how much guidance they need",
            "Explain the rules and expectations",
        ],
    },
    Question {
        prompt: "What matters most in a successful project?",
        options: [
            "A bold idea",
            "A happy team",
            "Adapting to change",
            "Meeting the deadline",
        ],
    },
    Question {
        prompt: "When someone disagrees with your plan, you...",
        options: [
            "Try to inspire them with the possibilities",
            "Listen carefully to their concerns",
            "Adjust the plan if it makes sense",
            "Explain why the plan should stand",
        ],
    },
    Question {
        prompt: "Which leader do you admire most?",
        options: [
            "A visionary innovator",
            "A humble community helper",
            "A calm crisis manager",
            "A strong commander",
        ],
    },
    Question {
        prompt: "How do you handle a crisis?",
        options: [
            "Turn it into an opportunity for change",
            "Check that everyone is okay",
            "Change tactics quickly",
            "Take control and give orders",
        ],
    },
    Question {
        prompt: "What kind of feedback do you give?",
        options: [
            "Encouraging and future-focused",
            "Gentle and caring",
            "Tailored to the person",
            "Direct and clear",
        ],
    },
    Question {
        prompt: "What is your main goal as a leader?",
        options: [
            "Change how things are done",
            "Help others grow",
            "Get the best outcome in each situation",
            "Keep things running efficiently",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Hybrid careers
// ────────────────────────────────────────────────────────────────────────────

/// Keyed `"{first}_{second}"` on category keys. Each unordered pair appears once;
/// lookups try both orders.
const HYBRID_CAREERS: &[(&str, &[&str])] = &[
    (
        "analytical_creative",
        &["UX Researcher", "Data Visualization Designer", "Game Developer"],
    ),
    (
        "analytical_social",
        &["Economist", "Public Health Analyst", "Policy Researcher"],
    ),
    (
        "analytical_practical",
        &["Systems Engineer", "Quality Assurance Engineer", "Robotics Technician"],
    ),
    (
        "creative_social",
        &["Art Therapist", "Event Planner", "Content Strategist"],
    ),
    (
        "creative_practical",
        &["Industrial Designer", "Set Designer", "Landscape Architect"],
    ),
    (
        "social_practical",
        &["Physical Therapist", "Paramedic", "Community Program Coordinator"],
    ),
    (
        "transformational_servant",
        &["Social Entrepreneur", "Education Reformer"],
    ),
    (
        "transformational_situational",
        &["Change Management Consultant", "Venture Builder"],
    ),
    (
        "transformational_directive",
        &["Chief Executive", "Turnaround Specialist"],
    ),
    (
        "servant_situational",
        &["Human Resources Manager", "Mediator"],
    ),
    (
        "servant_directive",
        &["Hospital Charge Nurse", "Disaster Relief Coordinator"],
    ),
    (
        "situational_directive",
        &["Project Manager", "Logistics Director"],
    ),
];

/// Looks up hybrid careers for a pair of category keys, in either order.
/// Unknown pairs yield an empty slice.
pub fn hybrid_careers(primary: &str, secondary: &str) -> &'static [&'static str] {
    let primary = primary.trim().to_lowercase();
    let secondary = secondary.trim().to_lowercase();
    let forward = format!("{primary}_{secondary}");
    let reverse = format!("{secondary}_{primary}");

    HYBRID_CAREERS
        .iter()
        .find(|(key, _)| *key == forward)
        .or_else(|| HYBRID_CAREERS.iter().find(|(key, _)| *key == reverse))
        .map(|(_, careers)| *careers)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_variant_question_counts() {
        assert_eq!(QuizVariant::Career.questions().len(), 10);
        assert_eq!(QuizVariant::Leadership.questions().len(), 9);
    }

    #[test]
    fn test_category_keys_are_unique_per_variant() {
        for variant in [QuizVariant::Career, QuizVariant::Leadership] {
            let keys: HashSet<_> = variant.categories().iter().map(|c| c.key).collect();
            assert_eq!(keys.len(), 4);
        }
    }

    #[test]
    fn test_hybrid_careers_order_independent() {
        let forward = hybrid_careers("analytical", "creative");
        let reverse = hybrid_careers("creative", "analytical");
        assert!(!forward.is_empty());
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_hybrid_careers_case_insensitive() {
        assert_eq!(
            hybrid_careers("Social", "PRACTICAL"),
            hybrid_careers("social", "practical")
        );
    }

    #[test]
    fn test_hybrid_careers_unknown_pair_is_empty() {
        assert!(hybrid_careers("analytical", "directive").is_empty());
        assert!(hybrid_careers("analytical", "analytical").is_empty());
    }

    #[test]
    fn test_every_pair_in_variant_has_hybrids() {
        for variant in [QuizVariant::Career, QuizVariant::Leadership] {
            let cats = variant.categories();
            for (i, a) in cats.iter().enumerate() {
                for b in cats.iter().skip(i + 1) {
                    assert!(
                        !hybrid_careers(a.key, b.key).is_empty(),
                        "missing hybrids for {}_{}",
                        a.key,
                        b.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_option_index_matches_exact_and_case_insensitive() {
        let q = &CAREER_QUESTIONS[1];
        assert_eq!(q.option_index("Art"), Some(1));
        assert_eq!(q.option_index("  mathematics "), Some(0));
        assert_eq!(q.option_index("Cooking"), None);
        assert_eq!(q.option_index(""), None);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(QuizVariant::parse("Career"), Some(QuizVariant::Career));
        assert_eq!(QuizVariant::parse("leadership"), Some(QuizVariant::Leadership));
        assert_eq!(QuizVariant::parse("mbti"), None);
    }
}
