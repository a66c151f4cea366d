//! Client-side content state.
//!
//! The document is fetched once. The only mutation is the profile photo,
//! applied locally first and then persisted as a whole-document overwrite:
//!
//! ```text
//! Idle ──begin──▶ Pending ──persist ok──▶ Committed
//!                    │
//!                    └──persist failed──▶ Reverted (snapshot restored)
//! ```
//!
//! Committed and Reverted are resting states; a new update may begin from either.

use tracing::{info, warn};

use crate::content::application::{
    domain::entities::{ContentDocument, PortfolioContent},
    ports::outgoing::{GatewayError, PhotoFile, PortfolioGateway},
};

pub const PHOTO_UPDATED: &str = "Profile photo updated successfully";
pub const PHOTO_REVERTED: &str = "Failed to save profile photo. The previous photo was restored.";
pub const PHOTO_UPLOAD_FAILED: &str = "Failed to upload photo. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum ContentLoad {
    Loading,
    Failed(String),
    Ready(ContentDocument),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhotoUpdate {
    Idle,
    Pending { previous: ContentDocument },
    Committed,
    Reverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot notification, drained with [`ContentSession::take_notice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PhotoUpdateError {
    #[error("Portfolio content is not loaded")]
    NotLoaded,

    #[error("Photo cannot be empty")]
    EmptyPhoto,

    #[error("A photo update is already pending")]
    AlreadyPending,

    #[error("No photo update is pending")]
    NotPending,

    #[error("Photo upload failed: {0}")]
    Upload(GatewayError),
}

pub struct ContentSession<G>
where
    G: PortfolioGateway,
{
    gateway: G,
    load: ContentLoad,
    photo_update: PhotoUpdate,
    notice: Option<Notice>,
}

impl<G> ContentSession<G>
where
    G: PortfolioGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            load: ContentLoad::Loading,
            photo_update: PhotoUpdate::Idle,
            notice: None,
        }
    }

    /// Fetches the document on the first call only; later calls return the settled state.
    pub async fn load(&mut self) -> &ContentLoad {
        if self.load == ContentLoad::Loading {
            self.load = match self.gateway.fetch_content().await {
                Ok(document) => ContentLoad::Ready(document),
                Err(e) => {
                    warn!("Failed to load content: {}", e);
                    ContentLoad::Failed(e.to_string())
                }
            };
        }
        &self.load
    }

    pub fn state(&self) -> &ContentLoad {
        &self.load
    }

    pub fn content(&self) -> Option<&PortfolioContent> {
        self.document().map(ContentDocument::content)
    }

    pub fn document(&self) -> Option<&ContentDocument> {
        match &self.load {
            ContentLoad::Ready(document) => Some(document),
            _ => None,
        }
    }

    pub fn photo_update(&self) -> &PhotoUpdate {
        &self.photo_update
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Applies `photo` locally and keeps a snapshot for revert.
    pub fn begin_photo_update(&mut self, photo: &str) -> Result<(), PhotoUpdateError> {
        let photo = photo.trim();
        if photo.is_empty() {
            return Err(PhotoUpdateError::EmptyPhoto);
        }
        if matches!(self.photo_update, PhotoUpdate::Pending { .. }) {
            return Err(PhotoUpdateError::AlreadyPending);
        }

        let ContentLoad::Ready(document) = &mut self.load else {
            return Err(PhotoUpdateError::NotLoaded);
        };

        let previous = document.clone();
        *document = previous.with_photo(photo);
        self.photo_update = PhotoUpdate::Pending { previous };
        Ok(())
    }

    /// Sends the whole document. On failure the snapshot comes back and an error notice is queued.
    pub async fn persist_photo_update(&mut self) -> Result<&PhotoUpdate, PhotoUpdateError> {
        let previous = match std::mem::replace(&mut self.photo_update, PhotoUpdate::Idle) {
            PhotoUpdate::Pending { previous } => previous,
            other => {
                self.photo_update = other;
                return Err(PhotoUpdateError::NotPending);
            }
        };

        let Some(current) = self.document().cloned() else {
            self.load = ContentLoad::Ready(previous);
            self.photo_update = PhotoUpdate::Reverted;
            return Err(PhotoUpdateError::NotLoaded);
        };

        match self.gateway.persist_content(&current).await {
            Ok(()) => {
                info!("Profile photo persisted");
                self.photo_update = PhotoUpdate::Committed;
                self.notice = Some(Notice::success(PHOTO_UPDATED));
            }
            Err(e) => {
                warn!("Failed to persist photo update, reverting: {}", e);
                self.load = ContentLoad::Ready(previous);
                self.photo_update = PhotoUpdate::Reverted;
                self.notice = Some(Notice::error(PHOTO_REVERTED));
            }
        }

        Ok(&self.photo_update)
    }

    pub async fn update_photo(&mut self, photo: &str) -> Result<&PhotoUpdate, PhotoUpdateError> {
        self.begin_photo_update(photo)?;
        self.persist_photo_update().await
    }

    /// Uploads a local file, then runs the update with the returned data URI.
    pub async fn upload_photo_file(
        &mut self,
        photo: PhotoFile,
    ) -> Result<&PhotoUpdate, PhotoUpdateError> {
        if self.content().is_none() {
            return Err(PhotoUpdateError::NotLoaded);
        }
        if matches!(self.photo_update, PhotoUpdate::Pending { .. }) {
            return Err(PhotoUpdateError::AlreadyPending);
        }

        let photo_url = match self.gateway.upload_photo(photo).await {
            Ok(url) => url,
            Err(e) => {
                warn!("Photo upload failed: {}", e);
                self.notice = Some(Notice::error(PHOTO_UPLOAD_FAILED));
                return Err(PhotoUpdateError::Upload(e));
            }
        };

        self.update_photo(&photo_url).await
    }
}
