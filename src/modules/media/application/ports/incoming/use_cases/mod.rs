mod encode_photo;

pub use encode_photo::{EncodePhotoCommand, EncodePhotoCommandError, EncodePhotoUseCase};
