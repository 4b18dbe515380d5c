use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::forms::pagination::page_request_from_query;
use crate::forms::patient::{NewPatientForm, UpdatePatientForm};
use crate::repository::{DieselRepository, PatientSort};
use crate::routes::run_blocking;
use crate::services::ServiceError;
use crate::services::patient as patient_service;

#[post("/paciente")]
pub async fn create_patient(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NewPatientForm>,
) -> Result<HttpResponse, ServiceError> {
    let repo = repo.into_inner();
    let patient =
        run_blocking(move || patient_service::create_patient(repo.as_ref(), form)).await?;

    let location = req
        .url_for("patient_details", [patient.id.to_string()])
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(patient))
}

#[get("/paciente")]
pub async fn list_patients(
    repo: web::Data<DieselRepository>,
    web::Query(params): web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ServiceError> {
    let page = page_request_from_query::<PatientSort>(&params)?;
    let repo = repo.into_inner();
    let patients =
        run_blocking(move || patient_service::list_patients(repo.as_ref(), page)).await?;

    Ok(HttpResponse::Ok().json(patients))
}

#[get("/paciente/{id}", name = "patient_details")]
pub async fn show_patient(
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let patient_id = patient_id.into_inner();
    let repo = repo.into_inner();
    let patient =
        run_blocking(move || patient_service::get_patient(repo.as_ref(), patient_id)).await?;

    Ok(HttpResponse::Ok().json(patient))
}

#[get("/paciente/{id}/active")]
pub async fn patient_status(
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let patient_id = patient_id.into_inner();
    let repo = repo.into_inner();
    let status =
        run_blocking(move || patient_service::patient_status(repo.as_ref(), patient_id)).await?;

    Ok(HttpResponse::Ok().json(status))
}

#[put("/paciente")]
pub async fn update_patient(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdatePatientForm>,
) -> Result<HttpResponse, ServiceError> {
    let repo = repo.into_inner();
    let patient =
        run_blocking(move || patient_service::update_patient(repo.as_ref(), form)).await?;

    Ok(HttpResponse::Ok().json(patient))
}

#[delete("/paciente/{id}")]
pub async fn delete_patient(
    repo: web::Data<DieselRepository>,
    patient_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let patient_id = patient_id.into_inner();
    let repo = repo.into_inner();
    run_blocking(move || patient_service::deactivate_patient(repo.as_ref(), patient_id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
