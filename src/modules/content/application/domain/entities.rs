use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Every field defaults so a partially filled document still renders.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub skills: SkillsGroup,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub research: Vec<Research>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
}

impl PortfolioContent {
    /// Copy of the document with only the profile photo replaced.
    pub fn with_photo(&self, photo: &str) -> Self {
        let mut updated = self.clone();
        updated.personal_info.photo = photo.to_string();
        updated
    }
}

/// A fetched document: the typed view for reading, plus the JSON it came from.
///
/// Writes go out as the JSON, so keys the typed view does not model, and keys
/// that were absent, reach the server exactly as they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    raw: Value,
    content: PortfolioContent,
}

impl ContentDocument {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let content = serde_json::from_value(raw.clone())?;
        Ok(Self { raw, content })
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    /// Copy with `personalInfo.photo` replaced and every other key untouched.
    pub fn with_photo(&self, photo: &str) -> Self {
        let mut raw = self.raw.clone();
        if let Value::Object(root) = &mut raw {
            let info = root
                .entry("personalInfo")
                .or_insert_with(|| Value::Object(Map::new()));
            if !info.is_object() {
                *info = Value::Object(Map::new());
            }
            if let Value::Object(info) = info {
                info.insert("photo".to_string(), Value::String(photo.to_string()));
            }
        }

        Self {
            raw,
            content: self.content.with_photo(photo),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
    pub photo: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub cgpa: String,
}

/// Fixed skill categories, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsGroup {
    #[serde(rename = "Languages")]
    pub languages: Vec<String>,
    #[serde(rename = "Backend")]
    pub backend: Vec<String>,
    #[serde(rename = "Frontend")]
    pub frontend: Vec<String>,
    #[serde(rename = "ML & Data")]
    pub ml_and_data: Vec<String>,
    #[serde(rename = "Cloud & DevOps")]
    pub cloud_and_devops: Vec<String>,
    #[serde(rename = "Tools")]
    pub tools: Vec<String>,
}

impl SkillsGroup {
    pub const CATEGORY_NAMES: [&'static str; 6] = [
        "Languages",
        "Backend",
        "Frontend",
        "ML & Data",
        "Cloud & DevOps",
        "Tools",
    ];

    /// `(category name, skills)` pairs in display order.
    pub fn categories(&self) -> [(&'static str, &[String]); 6] {
        let [languages, backend, frontend, ml_and_data, cloud_and_devops, tools] =
            Self::CATEGORY_NAMES;
        [
            (languages, self.languages.as_slice()),
            (backend, self.backend.as_slice()),
            (frontend, self.frontend.as_slice()),
            (ml_and_data, self.ml_and_data.as_slice()),
            (cloud_and_devops, self.cloud_and_devops.as_slice()),
            (tools, self.tools.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub tech_stack: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOutcome {
    pub metric: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub problem: String,
    pub approach: String,
    pub technologies: Vec<String>,
    pub outcomes: Vec<ProjectOutcome>,
    pub github: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Research {
    pub title: String,
    pub status: String,
    pub venue: String,
    pub year: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
}
