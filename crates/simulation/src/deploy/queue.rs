use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::structures::Owner;

use super::engine::{DeployError, DeployReport};
use super::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub region: Region,
    pub owner: Owner,
}

/// FIFO of deployment requests, drained in full every fixed tick.
#[derive(Resource, Debug, Default)]
pub struct DeployQueue {
    pending: Vec<DeployRequest>,
}

impl DeployQueue {
    pub fn push(&mut self, request: DeployRequest) {
        self.pending.push(request);
    }

    pub fn drain(&mut self) -> Vec<DeployRequest> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Maximum number of outcomes retained.
const MAX_ENTRIES: usize = 64;

/// Ring-buffer log of deployment outcomes, newest last.
#[derive(Resource, Debug, Default)]
pub struct DeployLog {
    entries: Vec<(DeployRequest, Result<DeployReport, DeployError>)>,
}

impl DeployLog {
    pub fn push(&mut self, request: DeployRequest, outcome: Result<DeployReport, DeployError>) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((request, outcome));
    }

    /// Most recent outcome, if any run has finished.
    pub fn latest(&self) -> Option<&(DeployRequest, Result<DeployReport, DeployError>)> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
