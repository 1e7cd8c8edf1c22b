use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner reads terminal events from.
///
/// `Test` is a finite script; once it runs dry the runner settles
/// outstanding fetches, draws a final frame and stops.
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => tui.lock().await.next().await,
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
