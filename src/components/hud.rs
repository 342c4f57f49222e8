use bevy_ecs::prelude::Component;

/// Marks a HUD text entity and identifies which value it displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudLabel {
    /// Current score.
    Score,
    /// Elapsed level time.
    Time,
}
