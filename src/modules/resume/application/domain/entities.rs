use std::fmt;
use std::str::FromStr;

/// The two published resume flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeVariant {
    Sde,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resume variant: {0}")]
pub struct UnknownResumeVariant(pub String);

impl ResumeVariant {
    pub const ALL: [ResumeVariant; 2] = [ResumeVariant::Sde, ResumeVariant::Ai];

    pub fn slug(&self) -> &'static str {
        match self {
            ResumeVariant::Sde => "sde",
            ResumeVariant::Ai => "ai",
        }
    }

    /// Human-facing name used on the "not available" page.
    pub fn label(&self) -> &'static str {
        match self {
            ResumeVariant::Sde => "SDE",
            ResumeVariant::Ai => "AI/ML",
        }
    }

    /// The name the owner is asked to use when adding the file.
    pub fn canonical_file_name(&self) -> &'static str {
        match self {
            ResumeVariant::Sde => "SDE_Resume.pdf",
            ResumeVariant::Ai => "AI_Resume.pdf",
        }
    }

    /// Default second-choice name, also the only name tried in the fallback dir.
    /// Holds no owner name; `RESUME_SDE_ALTERNATE_NAME` / `RESUME_AI_ALTERNATE_NAME`
    /// replace it for a specific owner's files.
    pub fn alternate_file_name(&self) -> &'static str {
        match self {
            ResumeVariant::Sde => "SDE resume.pdf",
            ResumeVariant::Ai => "AI resume.pdf",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            ResumeVariant::Sde => "#7c3aed",
            ResumeVariant::Ai => "#06b6d4",
        }
    }

    /// `Jane_Doe` + Sde → `Jane_Doe_SDE_Resume.pdf`.
    pub fn download_name(&self, prefix: Option<&str>) -> String {
        match prefix.map(str::trim).filter(|p| !p.is_empty()) {
            Some(prefix) => format!("{}_{}", prefix, self.canonical_file_name()),
            None => self.canonical_file_name().to_string(),
        }
    }
}

impl FromStr for ResumeVariant {
    type Err = UnknownResumeVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sde" => Ok(ResumeVariant::Sde),
            "ai" => Ok(ResumeVariant::Ai),
            _ => Err(UnknownResumeVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ResumeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A resume file ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub download_name: String,
    pub bytes: Vec<u8>,
}
