//! Expand/collapse state for one endpoint card.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Disclosure state of a collapsible panel. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub expanded: bool,
}

impl PanelState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Disclosure glyph for the header.
    #[must_use]
    pub fn chevron(self) -> &'static str {
        if self.expanded { "▾" } else { "▸" }
    }

    /// `aria-expanded` attribute value.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}
