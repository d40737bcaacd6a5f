// Extraction Engine
// Turns raw résumé text into contact fields, education, projects, skills and an
// experience span. Every function here is total: no match means an empty result.

pub mod contact;
pub mod education;
pub mod experience;
pub mod models;
pub mod projects;
pub mod skills;
pub mod text;

pub use contact::extract_contact_info;
pub use education::extract_education;
pub use experience::{extract_years_experience, extract_years_experience_as_of};
pub use models::{ContactInfo, EducationEntry, ExperienceSpan, SkillGroup, SkillSet};
pub use projects::extract_projects;
pub use skills::{extract_skills, group_skills_by_theme};
