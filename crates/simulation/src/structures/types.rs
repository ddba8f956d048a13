use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The faction a structure belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub struct Team(pub u8);

/// Identity attributed to every structure created during a run: the acting
/// unit and the team it builds for. Opaque to the deployment engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub unit: u32,
    pub team: Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Processor,
    MemoryBank,
    MessageBoard,
    Switch,
}

impl StructureKind {
    /// Whether this kind can hold a logic program.
    pub fn accepts_script(self) -> bool {
        matches!(self, StructureKind::Processor)
    }

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::Processor => "processor",
            StructureKind::MemoryBank => "memory bank",
            StructureKind::MessageBoard => "message board",
            StructureKind::Switch => "switch",
        }
    }
}

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub grid_x: usize,
    pub grid_y: usize,
    pub owner: Owner,
}

/// The program held by a script-capable structure. Present from spawn with
/// empty source; an upload replaces the whole text.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogicScript {
    pub source: String,
}

impl LogicScript {
    pub fn is_blank(&self) -> bool {
        self.source.is_empty()
    }
}

/// Marker for structures still being assembled. While present, the structure
/// is not operational. Deployed structures are spawned without it.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Assembling {
    pub ticks_remaining: u32,
}
