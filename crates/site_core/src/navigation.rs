use shared::domain::SectionId;
use tracing::debug;

/// Content offset after which the navigation bar switches to its compact,
/// glass-backed style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

#[derive(Debug, Default)]
pub struct NavigationState {
    menu_open: bool,
    scrolled: bool,
    pending_scroll: Option<SectionId>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.scrolled = offset > SCROLLED_THRESHOLD;
    }

    /// Requests a smooth scroll to the section with anchor `id`. Unknown
    /// anchors are ignored. The mobile menu closes either way.
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        self.menu_open = false;
        match SectionId::from_anchor(id) {
            Some(section) => {
                self.pending_scroll = Some(section);
                true
            }
            None => {
                debug!(anchor = id, "ignoring scroll request for unknown section");
                false
            }
        }
    }

    pub fn pending_scroll(&self) -> Option<SectionId> {
        self.pending_scroll
    }

    /// Consumes the pending target if it is `section`.
    pub fn take_scroll_target_for(&mut self, section: SectionId) -> bool {
        if self.pending_scroll == Some(section) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
