use std::fmt;

use serde::Deserialize;

/// Body of the trending endpoint
#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    /// Trending videos, in ranking order
    pub videos: Vec<RawVideo>,
}

/// A video record as the API sends it
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: ViewCount,
    pub published_at: String,
    pub channel: RawChannel,
}

/// Channel object nested in every raw video
#[derive(Debug, Clone, Deserialize)]
pub struct RawChannel {
    pub name: String,
    pub profile_image_url: String,
}

/// Data structure shown by a video card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSummary {
    /// Unique video identifier, also the card key
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: ViewCount,
    /// Publication date, kept as the API formats it
    pub published_at: String,
    pub channel_name: String,
    pub channel_profile_image_url: String,
}

impl From<RawVideo> for VideoSummary {
    fn from(raw: RawVideo) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            thumbnail_url: raw.thumbnail_url,
            view_count: raw.view_count,
            published_at: raw.published_at,
            channel_name: raw.channel.name,
            channel_profile_image_url: raw.channel.profile_image_url,
        }
    }
}

/// Projects raw records into display models, keeping their order
pub fn project_videos(raw: Vec<RawVideo>) -> Vec<VideoSummary> {
    raw.into_iter().map(VideoSummary::from).collect()
}

/// View count as the API sends it: a number, or preformatted text like `"26K"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ViewCount {
    Number(u64),
    Text(String),
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, views: ViewCount) -> RawVideo {
        RawVideo {
            id: id.to_string(),
            title: format!("title {id}"),
            thumbnail_url: format!("https://img.example/{id}.png"),
            view_count: views,
            published_at: "Apr 19, 2019".to_string(),
            channel: RawChannel {
                name: format!("channel {id}"),
                profile_image_url: format!("https://img.example/{id}-profile.png"),
            },
        }
    }

    #[test]
    fn projection_copies_every_field() {
        let summary = VideoSummary::from(raw("ad9822d2", ViewCount::Text("1.4K".to_string())));

        assert_eq!(summary.id, "ad9822d2");
        assert_eq!(summary.title, "title ad9822d2");
        assert_eq!(summary.thumbnail_url, "https://img.example/ad9822d2.png");
        assert_eq!(summary.view_count, ViewCount::Text("1.4K".to_string()));
        assert_eq!(summary.published_at, "Apr 19, 2019");
        assert_eq!(summary.channel_name, "channel ad9822d2");
        assert_eq!(
            summary.channel_profile_image_url,
            "https://img.example/ad9822d2-profile.png"
        );
    }

    #[test]
    fn projection_preserves_order() {
        let ids: Vec<String> = project_videos(vec![
            raw("c", ViewCount::Number(1)),
            raw("a", ViewCount::Number(2)),
            raw("b", ViewCount::Number(3)),
        ])
        .into_iter()
        .map(|v| v.id)
        .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn view_count_is_kept_verbatim() {
        let json = r#"{
            "id": "x",
            "title": "t",
            "thumbnail_url": "u",
            "view_count": "26K",
            "published_at": "p",
            "channel": { "name": "n", "profile_image_url": "i" }
        }"#;
        let video = VideoSummary::from(serde_json::from_str::<RawVideo>(json).unwrap());
        assert_eq!(video.view_count, ViewCount::Text("26K".to_string()));
        assert_eq!(video.view_count.to_string(), "26K");

        let json = json.replace("\"26K\"", "26000");
        let video: RawVideo = serde_json::from_str(&json).unwrap();
        assert_eq!(video.view_count, ViewCount::Number(26000));
        assert_eq!(video.view_count.to_string(), "26000");
    }
}
