use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::validation::ValidationError;
use crate::services::{ErrorKind, ServiceError};

pub mod categories;

/// Registers every HTTP endpoint of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::get_category)
        .service(categories::update_category)
        .service(categories::delete_category);
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
    pub errors: Vec<ValidationError>,
}

impl ApiError {
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            errors: vec![ValidationError::new(message.clone())],
            message,
        }
    }
}

impl From<&ServiceError> for ApiError {
    fn from(value: &ServiceError) -> Self {
        let errors = value.errors();
        let message = match value {
            ServiceError::Notification(notification) => notification
                .first_error()
                .map(|e| e.message.clone())
                .unwrap_or_default(),
            other => other.to_string(),
        };
        Self { message, errors }
    }
}

/// Maps a use-case failure to its HTTP response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err.kind() {
        ErrorKind::NotFound => HttpResponse::NotFound().json(ApiError::from(err)),
        ErrorKind::Validation => HttpResponse::UnprocessableEntity().json(ApiError::from(err)),
        ErrorKind::Storage => {
            log::error!("Unhandled storage error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
