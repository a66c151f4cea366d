use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::EncodePhotoUseCase;

#[derive(Clone)]
pub struct MediaUseCases {
    pub encode_photo: Arc<dyn EncodePhotoUseCase + Send + Sync>,
}
