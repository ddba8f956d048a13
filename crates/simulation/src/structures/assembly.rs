use bevy::prelude::*;

use super::types::Assembling;

/// Advances assembly each tick. When the countdown reaches zero the
/// `Assembling` marker is removed and the structure becomes operational.
pub fn progress_assembly(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Assembling)>,
) {
    for (entity, mut assembling) in &mut query {
        if assembling.ticks_remaining > 0 {
            assembling.ticks_remaining -= 1;
        }
        if assembling.ticks_remaining == 0 {
            commands.entity(entity).remove::<Assembling>();
        }
    }
}
