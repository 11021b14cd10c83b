use serde::{Deserialize, Serialize};

/// One recommended follow-up video from the search API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoRecommendation {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_round_trip_serialization() {
        let recommendation = VideoRecommendation {
            title: "Intro to Graph Theory".to_string(),
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
            thumbnail: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".to_string(),
        };

        let json = serde_json::to_string(&recommendation).expect("should serialize");
        let parsed: VideoRecommendation =
            serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(recommendation, parsed);
    }
}
