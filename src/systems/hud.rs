//! HUD refresh system.
//!
//! Rewrites the score and elapsed-time labels from the world signals and the
//! level clock. Runs whenever the level scene is up, including while paused
//! or ended, so the frozen values stay on screen.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::hud::HudLabel;
use crate::resources::clock::LevelClock;
use crate::resources::worldsignals::WorldSignals;

/// Refresh the HUD labels from the current score and clock.
pub fn hud_update(
    signals: Res<WorldSignals>,
    clock: Option<Res<LevelClock>>,
    mut labels: Query<(&HudLabel, &mut DynamicText)>,
) {
    let score = signals.get_integer("score").unwrap_or(0);
    let seconds = clock.map(|c| c.seconds()).unwrap_or(0);

    for (label, mut text) in labels.iter_mut() {
        match label {
            HudLabel::Score => text.set_content(format!("SCORE {}", score)),
            HudLabel::Time => {
                text.set_content(format!("TIME {:02}:{:02}", seconds / 60, seconds % 60))
            }
        }
    }
}
