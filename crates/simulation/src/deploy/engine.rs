//! The deployment engine: a single row-major pass over a region, creating
//! one finished processor per cell and uploading the matching script from a
//! sequentially numbered source.
//!
//! The engine owns nothing: the script source and the deploy site are
//! injected capabilities, so the same pass runs against the ECS world in
//! production and against fakes in tests. There are no retries and no
//! rollback, and region capacity is never reconciled against the script
//! count. The first failure from either collaborator aborts the run and
//! propagates.

use std::fmt;

use bevy::prelude::*;

use crate::actions::ActionError;
use crate::structures::{Owner, StructureKind};

use super::region::Region;

/// The fixed placeholder kind provisioned on every cell of a deployment.
pub const DEPLOY_KIND: StructureKind = StructureKind::Processor;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Error surfaced by a script source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source itself cannot be reached: bad pointer, unreadable count.
    Unavailable(String),
    /// An index below the reported count could not be read.
    Missing { index: usize, reason: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(reason) => {
                write!(f, "script source unavailable: {reason}")
            }
            SourceError::Missing { index, reason } => {
                write!(f, "script {index} cannot be read: {reason}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// A sequentially numbered supply of script text.
pub trait ScriptSource {
    /// Total number of scripts available.
    fn script_count(&self) -> Result<usize, SourceError>;

    /// Raw text of the script at `index`, which the caller guarantees is
    /// below [`script_count`](Self::script_count).
    fn read_script(&self, index: usize) -> Result<String, SourceError>;
}

/// World-mutation capability the engine deploys through.
pub trait DeploySite {
    /// Create a finished structure of `kind` at `(x, y)` owned by `owner`.
    fn create_structure(
        &mut self,
        x: i32,
        y: i32,
        kind: StructureKind,
        owner: Owner,
    ) -> Result<(), ActionError>;

    /// Handle of the structure currently at `(x, y)`, if any. The engine
    /// calls this immediately after each create to obtain the upload target.
    fn structure_at(&self, x: i32, y: i32) -> Option<Entity>;

    /// Replace the program on the structure, overwriting the default.
    fn upload_script(&mut self, target: Entity, source: &str) -> Result<(), ActionError>;
}

/// Boxed script source the deployment executor reads from. Inserted by the
/// front end; its absence makes every deployment fail as unavailable.
#[derive(Resource)]
pub struct ScriptLibrary(pub Box<dyn ScriptSource + Send + Sync>);

impl ScriptLibrary {
    pub fn new(source: impl ScriptSource + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DeployError {
    /// `min_x > max_x`: the cursor would never wrap and the scan would walk
    /// one endless row. Rejected before anything is touched.
    InvalidRegion { min_x: i32, max_x: i32 },
    /// The source failed: count unreadable (nothing touched) or a mid-run
    /// read failure (cells before the failing index stay configured).
    Source(SourceError),
    /// The site refused a create or upload at scan position `index`. Cells
    /// before it stay configured; the rest are never attempted.
    Placement {
        x: i32,
        y: i32,
        index: usize,
        error: ActionError,
    },
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::InvalidRegion { min_x, max_x } => {
                write!(f, "invalid region: min_x {min_x} > max_x {max_x}")
            }
            DeployError::Source(err) => write!(f, "{err}"),
            DeployError::Placement { x, y, index, error } => {
                write!(f, "placement of script {index} at ({x}, {y}) rejected: {error}")
            }
        }
    }
}

impl std::error::Error for DeployError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeployError::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for DeployError {
    fn from(err: SourceError) -> Self {
        DeployError::Source(err)
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployReport {
    /// Number of create+upload pairs issued, always the source's count.
    pub placed: usize,
}

// ---------------------------------------------------------------------------
// The pass
// ---------------------------------------------------------------------------

/// Deploy every script the source holds onto `region`, one finished
/// processor per cell in row-major order starting at `(min_x, min_y)`.
///
/// Script `i` lands on the cell `region.cell(i)`: left to right, wrapping
/// into a new row past `max_x`. Each cell gets exactly one create and one
/// upload, in that order, before the cursor advances. Runs are independent:
/// deploying twice issues every operation twice.
pub fn deploy(
    region: Region,
    owner: Owner,
    source: &dyn ScriptSource,
    site: &mut dyn DeploySite,
) -> Result<DeployReport, DeployError> {
    if !region.is_valid() {
        return Err(DeployError::InvalidRegion {
            min_x: region.min_x,
            max_x: region.max_x,
        });
    }

    let count = source.script_count()?;

    let mut x = region.min_x;
    let mut y = region.min_y;
    let mut index = 0usize;

    while index < count {
        site.create_structure(x, y, DEPLOY_KIND, owner)
            .map_err(|error| DeployError::Placement { x, y, index, error })?;

        let text = source.read_script(index)?;

        let target = site.structure_at(x, y).ok_or(DeployError::Placement {
            x,
            y,
            index,
            error: ActionError::NotFound,
        })?;
        site.upload_script(target, &text)
            .map_err(|error| DeployError::Placement { x, y, index, error })?;

        index += 1;
        x += 1;
        if x > region.max_x {
            x = region.min_x;
            y += 1;
        }
    }

    Ok(DeployReport { placed: count })
}
