//! Static job-category table used to turn quiz personality and interests into
//! job-search terms. Read-only; names are unique.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCategoryMapping {
    pub name: &'static str,
    /// Personality adjectives; quiz category names are matched against these.
    pub traits: &'static [&'static str],
    pub job_titles: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub static CAREER_CATEGORY_MAPPINGS: &[CareerCategoryMapping] = &[
    CareerCategoryMapping {
        name: "Technology",
        traits: &["analytical", "logical", "problem-solving", "curious", "detail-oriented"],
        job_titles: &[
            "Software Engineering Intern",
            "Data Analyst Intern",
            "Web Developer Intern",
            "IT Support Intern",
            "Machine Learning Intern",
            "Cybersecurity Intern",
        ],
        keywords: &[
            "software",
            "programming",
            "computer science",
            "data",
            "AI",
            "machine learning",
            "web development",
            "cybersecurity",
            "cloud",
            "information technology",
            "developer",
        ],
    },
    CareerCategoryMapping {
        name: "Healthcare",
        traits: &["social", "caring", "empathetic", "practical", "patient"],
        job_titles: &[
            "Healthcare Administration Intern",
            "Clinical Research Intern",
            "Medical Assistant Intern",
            "Public Health Intern",
        ],
        keywords: &[
            "healthcare",
            "medical",
            "nursing",
            "hospital",
            "public health",
            "clinical",
            "medicine",
            "wellness",
        ],
    },
    CareerCategoryMapping {
        name: "Business",
        traits: &["analytical", "organized", "situational", "persuasive", "strategic"],
        job_titles: &[
            "Business Analyst Intern",
            "Marketing Intern",
            "Finance Intern",
            "Sales Intern",
            "Operations Intern",
        ],
        keywords: &[
            "business",
            "marketing",
            "finance",
            "accounting",
            "sales",
            "economics",
            "entrepreneurship",
            "consulting",
        ],
    },
    CareerCategoryMapping {
        name: "Creative Arts",
        traits: &["creative", "imaginative", "expressive", "artistic", "original"],
        job_titles: &[
            "Graphic Design Intern",
            "Content Creator Intern",
            "UX Design Intern",
            "Video Production Intern",
            "Copywriting Intern",
        ],
        keywords: &[
            "design",
            "art",
            "music",
            "writing",
            "photography",
            "film",
            "media",
            "fashion",
            "animation",
        ],
    },
    CareerCategoryMapping {
        name: "Education",
        traits: &["social", "patient", "supportive", "communicative", "servant"],
        job_titles: &[
            "Teaching Assistant Intern",
            "Tutor",
            "Curriculum Development Intern",
            "Youth Program Intern",
        ],
        keywords: &[
            "education",
            "teaching",
            "tutoring",
            "learning",
            "school",
            "childcare",
            "coaching",
        ],
    },
    CareerCategoryMapping {
        name: "Engineering",
        traits: &["practical", "hands-on", "analytical", "directive", "methodical"],
        job_titles: &[
            "Mechanical Engineering Intern",
            "Civil Engineering Intern",
            "Electrical Engineering Intern",
            "Manufacturing Intern",
            "Robotics Intern",
        ],
        keywords: &[
            "engineering",
            "mechanical",
            "electrical",
            "civil",
            "robotics",
            "manufacturing",
            "construction",
            "automotive",
        ],
    },
    CareerCategoryMapping {
        name: "Science",
        traits: &["analytical", "curious", "investigative", "methodical"],
        job_titles: &[
            "Research Intern",
            "Lab Assistant Intern",
            "Environmental Science Intern",
            "Biology Research Intern",
        ],
        keywords: &[
            "science",
            "research",
            "biology",
            "chemistry",
            "physics",
            "environment",
            "laboratory",
            "astronomy",
        ],
    },
    CareerCategoryMapping {
        name: "Social Services",
        traits: &["social", "empathetic", "servant", "supportive", "caring"],
        job_titles: &[
            "Social Work Intern",
            "Community Outreach Intern",
            "Counseling Intern",
            "Case Management Intern",
        ],
        keywords: &[
            "social work",
            "community",
            "counseling",
            "psychology",
            "volunteering",
            "advocacy",
            "nonprofit",
        ],
    },
    CareerCategoryMapping {
        name: "Leadership & Management",
        traits: &["transformational", "directive", "situational", "decisive", "visionary"],
        job_titles: &[
            "Management Trainee",
            "Project Coordinator Intern",
            "Operations Management Intern",
            "Leadership Development Intern",
        ],
        keywords: &[
            "management",
            "leadership",
            "project management",
            "operations",
            "strategy",
            "student government",
        ],
    },
];

/// Case-insensitive lookup by category name.
pub fn find_mapping(name: &str) -> Option<&'static CareerCategoryMapping> {
    let name = name.trim();
    CAREER_CATEGORY_MAPPINGS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}
