use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::RoadmapRequestDto, response::RoadmapResponseDto},
};

#[post("/api/roadmap")]
async fn generate_roadmap(
    state: web::Data<AppState>,
    request: web::Json<RoadmapRequestDto>,
) -> Result<HttpResponse, AppError> {
    let recommendations = state
        .video_searcher
        .search(
            &request.topic,
            &request.level,
            state.config.max_recommendations,
        )
        .await?;

    Ok(HttpResponse::Ok().json(RoadmapResponseDto { recommendations }))
}
