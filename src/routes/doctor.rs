use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::forms::doctor::{NewDoctorForm, UpdateDoctorForm};
use crate::forms::pagination::page_request_from_query;
use crate::repository::{DieselRepository, DoctorSort};
use crate::routes::run_blocking;
use crate::services::ServiceError;
use crate::services::doctor as doctor_service;

#[post("/medico")]
pub async fn create_doctor(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<NewDoctorForm>,
) -> Result<HttpResponse, ServiceError> {
    let repo = repo.into_inner();
    let doctor = run_blocking(move || doctor_service::create_doctor(repo.as_ref(), form)).await?;

    let location = req
        .url_for("doctor_details", [doctor.id.to_string()])
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(doctor))
}

#[get("/medico")]
pub async fn list_doctors(
    repo: web::Data<DieselRepository>,
    web::Query(params): web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ServiceError> {
    let page = page_request_from_query::<DoctorSort>(&params)?;
    let repo = repo.into_inner();
    let doctors = run_blocking(move || doctor_service::list_doctors(repo.as_ref(), page)).await?;

    Ok(HttpResponse::Ok().json(doctors))
}

#[get("/medico/{id}", name = "doctor_details")]
pub async fn show_doctor(
    repo: web::Data<DieselRepository>,
    doctor_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let doctor_id = doctor_id.into_inner();
    let repo = repo.into_inner();
    let doctor = run_blocking(move || doctor_service::get_doctor(repo.as_ref(), doctor_id)).await?;

    Ok(HttpResponse::Ok().json(doctor))
}

#[put("/medico")]
pub async fn update_doctor(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateDoctorForm>,
) -> Result<HttpResponse, ServiceError> {
    let repo = repo.into_inner();
    let doctor = run_blocking(move || doctor_service::update_doctor(repo.as_ref(), form)).await?;

    Ok(HttpResponse::Ok().json(doctor))
}

#[delete("/medico/{id}")]
pub async fn delete_doctor(
    repo: web::Data<DieselRepository>,
    doctor_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let doctor_id = doctor_id.into_inner();
    let repo = repo.into_inner();
    run_blocking(move || doctor_service::deactivate_doctor(repo.as_ref(), doctor_id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
