use serde::{Deserialize, Serialize};

use crate::structures::{Owner, StructureKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GameAction {
    PlaceStructure {
        pos: (i32, i32),
        kind: StructureKind,
        owner: Owner,
    },
    UploadScript {
        pos: (i32, i32),
        source: String,
    },
    DemolishRect {
        min: (i32, i32),
        max: (i32, i32),
    },
}
