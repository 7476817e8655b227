//! View capability system
//!
//! Views declare capabilities so the keyboard middleware can decide how to
//! route a key without knowing which view is active.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View accepts free text (characters, backspace, Enter to confirm)
        const TEXT_INPUT = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
