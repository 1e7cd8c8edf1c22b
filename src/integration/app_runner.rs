use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{navigation::NavigationMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::location::Location,
    infrastructure::{
        config::Config,
        launch_api::{LaunchLibraryClient, LaunchSource},
        tui::{event_source::EventSource, real::RealTui, Event, Frame, TuiLike},
    },
    integration::{app_shell::AppShell, elm_integration::ElmRuntime},
    presentation::{components::Components, view},
};

/// Drives the Elm runtime from terminal events and draws after every cycle.
///
/// The terminal and the event source are injected, so tests can run the
/// whole loop on a `TestTui`.
pub struct AppRunner<T: TuiLike + Send + 'static> {
    runtime: ElmRuntime,
    tui: Arc<Mutex<T>>,
    event_source: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    shell: AppShell,
    components: Components,
    initial_location: Location,
}

impl<T: TuiLike + Send + 'static> AppRunner<T> {
    /// Create a runner talking to the Launch Library API from `config`.
    pub async fn new_with_config(
        config: Config,
        tui: Arc<Mutex<T>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let source = Arc::new(LaunchLibraryClient::new(&config.api)?);
        Self::new_with_source(config, source, tui, event_source).await
    }

    /// Create a runner with an explicit data source.
    pub async fn new_with_source(
        config: Config,
        source: Arc<dyn LaunchSource>,
        tui: Arc<Mutex<T>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = ElmRuntime::new_with_source(initial_state, source);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            event_source,
            tui_cmd_rx,
            shell: AppShell::new(),
            components: Components::new(),
            initial_location: Location::root(),
        })
    }

    /// Location the first view is mounted from (the launch URL)
    pub fn with_initial_location(mut self, location: Location) -> Self {
        self.initial_location = location;
        self
    }

    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut ElmRuntime {
        &mut self.runtime
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    /// Run the main loop until quit is requested or the event source ends.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        self.runtime
            .send_msg(Msg::Navigation(NavigationMsg::Init(self.initial_location.clone())));
        self.update_cycle();
        self.render().await?;

        while self.run_one_cycle().await? {}

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Handle one terminal event, update, then render. Returns `false` once
    /// the loop should stop.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.event_source.next().await else {
            // Event source exhausted: let outstanding fetches land, draw the
            // final frame, then stop.
            self.runtime.settle().await.map_err(|e| eyre!(e))?;
            self.render().await?;
            return Ok(false);
        };

        if let Some(raw_msg) = raw_msg_from_event(event) {
            self.runtime.send_raw_msg(raw_msg);
        }
        self.update_cycle();

        // Handle commands that require immediate host reaction
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }

        self.render().await?;

        // Check quit condition from Elm state
        Ok(!self.runtime.state().system.should_quit)
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("ElmRuntime error: {e}");
            // Fall back to showing error via RawMsg to avoid tight loop
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("ElmRuntime error: {e}")));
        }
    }

    /// Remount the view for the current state and draw it.
    pub async fn render(&mut self) -> Result<()> {
        self.shell.mount(view::render_page(self.runtime.state()));

        let state = self.runtime.state();
        let mounted = self.shell.mounted();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut Frame<'_>| components.render(f, state, mounted))
    }
}

impl AppRunner<RealTui> {
    /// Runner on the real terminal, reading events from it.
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let event_source = EventSource::real(Arc::clone(&tui) as Arc<Mutex<dyn TuiLike + Send>>);
        Self::new_with_config(config, tui, event_source).await
    }
}

fn raw_msg_from_event(event: Event) -> Option<RawMsg> {
    match event {
        Event::Quit | Event::Closed => Some(RawMsg::Quit),
        Event::Tick => Some(RawMsg::Tick),
        Event::Render => Some(RawMsg::Render),
        Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
        Event::Key(key) => Some(RawMsg::Key(key)),
        Event::Paste(text) => Some(RawMsg::Paste(text)),
        Event::Error => Some(RawMsg::Error("terminal event stream failed".to_string())),
        Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => None,
    }
}
