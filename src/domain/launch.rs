//! Launch records as returned by the Launch Library API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchStatus {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One entry of a `mode=list` search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "mission", default)]
    pub mission_name: Option<String>,
    pub status: LaunchStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDetail {
    pub id: String,
    pub name: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub status: LaunchStatus,
    /// `null` for flights without a mission (tests, some early launches)
    #[serde(default)]
    pub mission: Option<Mission>,
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
}

/// Envelope of `GET launch/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchSearchResults {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<LaunchSummary>,
}

/// Result of a search as seen by the view layer.
///
/// `Empty` and `Failed` render with the same shape but stay separate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(Vec<LaunchSummary>),
    Empty,
    Failed,
}

impl SearchOutcome {
    pub fn from_results(results: Option<Vec<LaunchSummary>>) -> Self {
        match results {
            None => SearchOutcome::Failed,
            Some(launches) if launches.is_empty() => SearchOutcome::Empty,
            Some(launches) => SearchOutcome::Found(launches),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailOutcome {
    Found(Box<LaunchDetail>),
    Unavailable,
}

impl From<Option<LaunchDetail>> for DetailOutcome {
    fn from(detail: Option<LaunchDetail>) -> Self {
        match detail {
            Some(detail) => DetailOutcome::Found(Box::new(detail)),
            None => DetailOutcome::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_search_outcome_from_results() {
        assert_eq!(SearchOutcome::from_results(None), SearchOutcome::Failed);
        assert_eq!(SearchOutcome::from_results(Some(vec![])), SearchOutcome::Empty);

        let summary = LaunchSummary {
            id: "a".to_string(),
            name: "Falcon 9 Block 5 | Starlink".to_string(),
            mission_name: Some("Starlink".to_string()),
            status: LaunchStatus {
                name: "Success".to_string(),
                description: String::new(),
            },
        };
        assert_eq!(
            SearchOutcome::from_results(Some(vec![summary.clone()])),
            SearchOutcome::Found(vec![summary])
        );
    }

    #[test]
    fn test_deserialize_list_mode_payload() -> Result<()> {
        let json = r#"{
            "count": 2,
            "results": [
                {"id": "e3df2ecd", "name": "Electron | It's Business Time",
                 "mission": "It's Business Time", "status": {"id": 3, "name": "Launch Successful"}},
                {"id": "f059", "name": "Vostok-K | Vostok 1",
                 "mission": null, "status": {"name": "Launch Successful", "abbrev": "Success"}}
            ]
        }"#;
        let parsed: LaunchSearchResults = serde_json::from_str(json)?;

        assert_eq!(parsed.count, Some(2));
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(
            parsed.results[0].mission_name.as_deref(),
            Some("It's Business Time")
        );
        assert_eq!(parsed.results[1].mission_name, None);
        assert_eq!(parsed.results[1].status.name, "Launch Successful");
        Ok(())
    }

    #[test]
    fn test_deserialize_detail_payload() -> Result<()> {
        let json = r#"{
            "id": "42",
            "name": "Falcon 9 | CRS-21",
            "window_start": "2020-12-06T16:17:08Z",
            "window_end": "2020-12-06T16:17:08Z",
            "status": {"name": "Launch Successful", "description": "Payload inserted into orbit."},
            "mission": {"name": "CRS-21", "description": "Resupply mission."},
            "image": null
        }"#;
        let detail: LaunchDetail = serde_json::from_str(json)?;

        assert_eq!(detail.id, "42");
        assert_eq!(detail.mission.map(|m| m.name).as_deref(), Some("CRS-21"));
        assert_eq!(detail.image_url, None);
        assert_eq!(detail.window_start.to_rfc3339(), "2020-12-06T16:17:08+00:00");
        Ok(())
    }

    #[test]
    fn test_deserialize_detail_without_mission() -> Result<()> {
        let json = r#"{
            "id": "7a3a",
            "name": "Starship | Flight Test",
            "window_start": "2023-04-20T13:33:09Z",
            "window_end": "2023-04-20T14:35:00Z",
            "status": {"name": "Launch Failure", "description": "Did not reach orbit."},
            "mission": null,
            "image": "https://example.com/starship.png"
        }"#;
        let detail: LaunchDetail = serde_json::from_str(json)?;

        assert_eq!(detail.mission, None);
        assert!(matches!(
            DetailOutcome::from(Some(detail)),
            DetailOutcome::Found(_)
        ));
        Ok(())
    }

    #[test]
    fn test_detail_outcome_from_option() {
        assert_eq!(DetailOutcome::from(None), DetailOutcome::Unavailable);
    }
}
