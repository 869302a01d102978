// =============================================================================
// CS:GO Pro Web - Page Interaction
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Section Identifiers
// 4. Tests
// =============================================================================
// Pure state machines behind the page chrome. Nothing in here touches the
// DOM; the browser side lives in `crate::host`.
// =============================================================================

pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use menu::MenuState;
pub use nav::{navigate, NavOutcome, NavTarget, NAV_TARGETS};
pub use reveal::{stagger_delay_ms, IntersectionGate, ObserveOptions, SectionVisibility};
pub use scroll::ScrollState;

// -----------------------------------------------------------------------------
// 3. Section Identifiers
// -----------------------------------------------------------------------------

/// Anchored sections of the landing page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    News,
    Tournaments,
    Teams,
    Players,
}

impl SectionId {
    /// DOM id of the section element.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::News => "news",
            SectionId::Tournaments => "tournaments",
            SectionId::Teams => "teams",
            SectionId::Players => "players",
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn test_scroll_open_menu_then_navigate() {
        let host = MockHost::with_anchors(&["hero", "news", "tournaments", "teams", "players"]);
        let mut scroll = ScrollState::default();
        let mut menu = MenuState::default();

        if let Some(next) = scroll.next(200.0, 50.0) {
            scroll = next;
        }
        assert_eq!(scroll, ScrollState::Scrolled);

        menu = menu.toggled();
        assert_eq!(menu, MenuState::Open);

        let target = NavTarget::section("Teams", SectionId::Teams);
        assert_eq!(navigate(&host, &target, &mut menu), NavOutcome::Scrolled);
        assert_eq!(host.scrolled_to(), vec!["teams".to_string()]);
        assert_eq!(menu, MenuState::Closed);
        // Header style is untouched by navigation
        assert_eq!(scroll, ScrollState::Scrolled);
    }
}
