//! Structures: the placeable entities of the grid and the primitives that
//! create, configure, and remove them.

pub mod assembly;
pub mod placement;
pub mod plugin;
pub mod types;

pub use assembly::progress_assembly;
pub use placement::{demolish_rect, place_structure, set_script, upload_script};
pub use plugin::StructuresPlugin;
pub use types::{Assembling, LogicScript, Owner, Structure, StructureKind, Team};
