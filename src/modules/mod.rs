pub mod contact;
pub mod content;
pub mod email;
pub mod media;
pub mod resume;
pub mod site;
