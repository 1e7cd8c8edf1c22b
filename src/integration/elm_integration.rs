use std::{collections::VecDeque, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::launch_api::LaunchSource,
};

/// Owns the application state and drives messages through `update`
pub struct ElmRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    /// Fetch commands executed whose completion has not been processed yet
    outstanding_fetches: usize,
}

impl ElmRuntime {
    /// Create a new ElmRuntime without an executor; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            outstanding_fetches: 0,
        }
    }

    /// Create a new ElmRuntime whose fetch commands go to `source`
    pub fn new_with_source(initial_state: AppState, source: Arc<dyn LaunchSource>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(source, runtime.msg_tx.clone()));
        runtime
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_source() first.".to_string())
        }
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn outstanding_fetches(&self) -> usize {
        self.outstanding_fetches
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err(
                "No command executor available. Use new_with_source() to configure.".to_string(),
            );
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        self.outstanding_fetches += commands.iter().filter(|cmd| cmd.is_async()).count();
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if msg.is_fetch_completion() {
            self.outstanding_fetches = self.outstanding_fetches.saturating_sub(1);
        }

        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;

        // Add commands to queue
        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // First process raw messages and convert to domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        if self.cmd_executor.is_none() {
            return Ok(vec![]);
        }
        self.execute_pending_commands()
    }

    /// Run update cycles until every executed fetch has completed and been
    /// processed.
    pub async fn settle(&mut self) -> Result<Vec<String>, String> {
        let mut log = self.run_update_cycle()?;
        while self.outstanding_fetches > 0 {
            let Some(msg) = self.msg_rx.recv().await else {
                break;
            };
            self.msg_queue.push_back(msg);
            log.extend(self.run_update_cycle()?);
        }
        Ok(log)
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> ElmRuntimeStats {
        ElmRuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            outstanding_fetches: self.outstanding_fetches,
            history_len: self.state.navigation.len(),
            is_busy: self.state.is_busy(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct ElmRuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub outstanding_fetches: usize,
    pub history_len: usize,
    pub is_busy: bool,
    pub has_executor: bool,
}
