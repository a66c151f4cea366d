use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::entities::SkillsGroup;

/// One skills category after filtering, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SkillCategory {
    #[schema(example = "Languages")]
    pub name: String,
    #[schema(example = json!(["Go", "Python"]))]
    pub skills: Vec<String>,
}

/// Case-insensitive substring search across every category.
///
/// A blank query keeps all categories as they are, empty ones included.
/// Otherwise only categories with at least one match survive.
pub fn filter_skills(skills: &SkillsGroup, query: &str) -> Vec<SkillCategory> {
    let blank = query.trim().is_empty();
    // Only the blank check trims; surrounding spaces are part of the search text.
    let needle = query.to_lowercase();

    skills
        .categories()
        .into_iter()
        .filter_map(|(name, list)| {
            if blank {
                return Some(SkillCategory {
                    name: name.to_string(),
                    skills: list.to_vec(),
                });
            }

            let matching: Vec<String> = list
                .iter()
                .filter(|skill| skill.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            (!matching.is_empty()).then(|| SkillCategory {
                name: name.to_string(),
                skills: matching,
            })
        })
        .collect()
}
