mod encode_photo_service;

pub use encode_photo_service::EncodePhotoService;
