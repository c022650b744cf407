//! Floating header visibility.
//!
//! The header logo stays hidden while the hero section is on screen and
//! appears once the hero's bottom edge scrolls above the viewport top.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Whether the logo should show for a hero whose bottom edge sits at
/// `hero_bottom` px relative to the viewport top.
#[must_use]
pub fn logo_visible(hero_bottom: f64) -> bool {
    hero_bottom < 0.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub logo_visible: bool,
}

impl HeaderState {
    /// Re-evaluate after a scroll. Returns `true` when visibility changed.
    pub fn on_scroll(&mut self, hero_bottom: f64) -> bool {
        let next = logo_visible(hero_bottom);
        let changed = next != self.logo_visible;
        self.logo_visible = next;
        changed
    }
}
