//! HTTP handlers and the glue mapping service results onto responses.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod doctor;
pub mod patient;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

fn error_code(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::NotFound => "NOT_FOUND",
        ServiceError::Validation(_) => "VALIDATION_ERROR",
        ServiceError::Conflict(_) => "CONFLICT",
        ServiceError::Internal(_) => "INTERNAL_ERROR",
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the logs.
        let message = match self {
            ServiceError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: error_code(self),
            message,
        })
    }
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(err.to_string()).into()
}

/// Runs a Diesel-bound service call on the blocking thread pool.
pub(crate) async fn run_blocking<F, T>(call: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(call).await.map_err(|err| {
        log::error!("Blocking task failed: {err}");
        ServiceError::Internal(err.to_string())
    })?
}

/// Registers every clinic endpoint plus the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(doctor::create_doctor)
        .service(doctor::list_doctors)
        .service(doctor::show_doctor)
        .service(doctor::update_doctor)
        .service(doctor::delete_doctor)
        .service(patient::create_patient)
        .service(patient::list_patients)
        .service(patient::show_patient)
        .service(patient::patient_status)
        .service(patient::update_patient)
        .service(patient::delete_patient);
}
