use crate::game::{Action, GameSession};

/// Universal interface for bots that can take a seat at the table.
pub trait Agent {
    /// Pick an action for the player whose turn it is. The returned action
    /// must be one of `session.legal_actions()`.
    fn select_action(&mut self, session: &GameSession) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
