use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::resume::application::{
    domain::entities::ResumeVariant,
    ports::outgoing::{ResumeFileStore, ResumeStoreError},
};

/// Looks for resume PDFs in the assets directory, then in a fallback directory.
#[derive(Debug, Clone)]
pub struct ResumeDirectoryStore {
    assets_dir: PathBuf,
    fallback_dir: PathBuf,
    alternate_names: HashMap<ResumeVariant, String>,
}

impl ResumeDirectoryStore {
    pub fn new(assets_dir: impl Into<PathBuf>, fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            fallback_dir: fallback_dir.into(),
            alternate_names: HashMap::new(),
        }
    }

    /// Replaces the variant's default alternate file name.
    pub fn with_alternate_name(mut self, variant: ResumeVariant, name: impl Into<String>) -> Self {
        self.alternate_names.insert(variant, name.into());
        self
    }

    fn alternate_name(&self, variant: ResumeVariant) -> &str {
        self.alternate_names
            .get(&variant)
            .map(String::as_str)
            .unwrap_or_else(|| variant.alternate_file_name())
    }

    /// Search order; the first existing file wins.
    pub fn candidates(&self, variant: ResumeVariant) -> [PathBuf; 3] {
        [
            self.assets_dir.join(variant.canonical_file_name()),
            self.assets_dir.join(self.alternate_name(variant)),
            self.fallback_dir.join(self.alternate_name(variant)),
        ]
    }
}

#[async_trait]
impl ResumeFileStore for ResumeDirectoryStore {
    async fn load(&self, variant: ResumeVariant) -> Result<Option<Vec<u8>>, ResumeStoreError> {
        for candidate in self.candidates(variant) {
            let is_file = tokio::fs::metadata(&candidate)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            debug!(path = %candidate.display(), "Resume candidate found");
            return tokio::fs::read(&candidate)
                .await
                .map(Some)
                .map_err(|e| ResumeStoreError::Io(e.to_string()));
        }

        Ok(None)
    }
}
