//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effect requested by a view's update function
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Give keyboard focus to the input editor, right now
    FocusEditor,
    /// Raise the pending flag; the scheduler applies visuals on its next drain
    RequestUpdate,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command schedules a visual update
    pub fn requests_update(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::FocusEditor => false,
            Cmd::RequestUpdate => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.requests_update()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
