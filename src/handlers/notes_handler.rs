use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateNotesRequestDto, response::GenerateNotesResponseDto},
};

#[post("/api/notes/generate")]
async fn generate_notes(
    state: web::Data<AppState>,
    request: web::Json<GenerateNotesRequestDto>,
) -> Result<HttpResponse, AppError> {
    let notes = state
        .study_service
        .generate_study_notes(&request.video_url)
        .await?;

    Ok(HttpResponse::Ok().json(GenerateNotesResponseDto::from(notes)))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
