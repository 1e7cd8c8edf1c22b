//! Fixtures and a scripted launch source, shared by unit and integration tests

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Semaphore;

use crate::{
    domain::launch::{LaunchDetail, LaunchStatus, LaunchSummary, Mission},
    infrastructure::launch_api::LaunchSource,
};

pub fn sample_summary(id: &str, name: &str) -> LaunchSummary {
    LaunchSummary {
        id: id.to_string(),
        name: name.to_string(),
        mission_name: Some(format!("Mission {id}")),
        status: LaunchStatus {
            name: "Go for Launch".to_string(),
            description: "Current T-0 confirmed by official or reliable sources.".to_string(),
        },
    }
}

#[allow(clippy::unwrap_used)]
pub fn sample_detail(id: &str) -> LaunchDetail {
    LaunchDetail {
        id: id.to_string(),
        name: format!("Falcon 9 Block 5 | Launch {id}"),
        window_start: Utc.with_ymd_and_hms(2020, 12, 6, 16, 17, 8).unwrap(),
        window_end: Utc.with_ymd_and_hms(2020, 12, 6, 16, 47, 8).unwrap(),
        status: LaunchStatus {
            name: "Launch Successful".to_string(),
            description: "The launch vehicle successfully inserted its payload(s) into orbit."
                .to_string(),
        },
        mission: Some(Mission {
            name: format!("Mission {id}"),
            description: "Cargo resupply to the International Space Station.".to_string(),
        }),
        image_url: Some(format!("https://example.com/images/{id}.png")),
    }
}

/// In-memory [`LaunchSource`] with scripted answers.
///
/// Every call is recorded. With [`FakeLaunchSource::gated`], calls stay in
/// flight until [`FakeLaunchSource::release`] is called once per call. Releases
/// issued before a call starts are kept and consumed in call order.
#[derive(Clone, Default)]
pub struct FakeLaunchSource {
    summaries: Option<Vec<LaunchSummary>>,
    details: HashMap<String, LaunchDetail>,
    search_calls: Arc<Mutex<Vec<String>>>,
    detail_calls: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeLaunchSource {
    /// A source whose searches fail and whose lookups find nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Every search answers with `summaries`; an empty vector is a valid,
    /// empty answer.
    pub fn with_summaries(mut self, summaries: Vec<LaunchSummary>) -> Self {
        self.summaries = Some(summaries);
        self
    }

    pub fn with_detail(mut self, detail: LaunchDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Let one gated call complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }
}

#[async_trait]
impl LaunchSource for FakeLaunchSource {
    async fn search(&self, query: &str) -> Option<Vec<LaunchSummary>> {
        self.search_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.to_string());
        self.wait_for_gate().await;
        self.summaries.clone()
    }

    async fn get_launch(&self, id: &str) -> Option<LaunchDetail> {
        self.detail_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(id.to_string());
        self.wait_for_gate().await;
        self.details.get(id).cloned()
    }
}
