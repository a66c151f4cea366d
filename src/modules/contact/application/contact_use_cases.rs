use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactSubmissionsUseCase + Send + Sync>,
}
