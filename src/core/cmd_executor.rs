use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{fetch::FetchMsg, Msg},
    },
    domain::launch::{DetailOutcome, SearchOutcome},
    infrastructure::launch_api::LaunchSource,
};

/// Command executor that runs data-source requests on the tokio runtime and
/// forwards terminal commands to the host
#[derive(Clone)]
pub struct CmdExecutor {
    source: Arc<dyn LaunchSource>,
    msg_sender: mpsc::UnboundedSender<Msg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor; fetch completions are sent on `msg_sender`
    pub fn new(source: Arc<dyn LaunchSource>, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            source,
            msg_sender,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::SearchLaunches { mount, query } => {
                let source = Arc::clone(&self.source);
                let msg_sender = self.msg_sender.clone();
                let (mount, query) = (*mount, query.clone());
                tokio::spawn(async move {
                    let outcome = SearchOutcome::from_results(source.search(&query).await);
                    let msg = Msg::Fetch(FetchMsg::SearchCompleted {
                        mount,
                        query,
                        outcome,
                    });
                    if msg_sender.send(msg).is_err() {
                        log::warn!("Search completed after the runtime was dropped");
                    }
                });
            }

            Cmd::FetchLaunch { mount, id } => {
                let source = Arc::clone(&self.source);
                let msg_sender = self.msg_sender.clone();
                let (mount, id) = (*mount, id.clone());
                tokio::spawn(async move {
                    let outcome = DetailOutcome::from(source.get_launch(&id).await);
                    let msg = Msg::Fetch(FetchMsg::LaunchLoaded { mount, id, outcome });
                    if msg_sender.send(msg).is_err() {
                        log::warn!("Launch lookup completed after the runtime was dropped");
                    }
                });
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                    return Ok(());
                }
                // No TUI sender configured: drop with warning
                log::warn!("CmdExecutor: no TUI sender; dropping Resize {width}x{height}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }
}
