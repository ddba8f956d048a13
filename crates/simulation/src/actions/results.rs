use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    Error(ActionError),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }
}

/// Why the world refused a mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionError {
    OutOfBounds,
    BlockedByWater,
    BlockedByRock,
    CellOccupied,
    /// No structure at the target cell, or the handle no longer resolves.
    NotFound,
    /// The structure kind cannot hold a logic program.
    NotSupported,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::OutOfBounds => write!(f, "cell is outside the grid"),
            ActionError::BlockedByWater => write!(f, "cell is water"),
            ActionError::BlockedByRock => write!(f, "cell is bare rock"),
            ActionError::CellOccupied => write!(f, "cell already holds a structure"),
            ActionError::NotFound => write!(f, "no structure at the target cell"),
            ActionError::NotSupported => {
                write!(f, "structure kind cannot hold a logic program")
            }
        }
    }
}

impl std::error::Error for ActionError {}
