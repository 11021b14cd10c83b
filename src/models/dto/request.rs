use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct GenerateNotesRequestDto {
    pub video_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoadmapRequestDto {
    pub topic: String,
    pub level: String,
}
