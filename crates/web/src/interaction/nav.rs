// =============================================================================
// CS:GO Pro Web - Anchor Navigation
// =============================================================================
// Table of Contents:
// 1. Nav Targets
// 2. Navigate Action
// 3. Tests
// =============================================================================

use std::borrow::Cow;

use super::{MenuState, SectionId};
use crate::host::PageHost;

// -----------------------------------------------------------------------------
// 1. Nav Targets
// -----------------------------------------------------------------------------

/// A link label paired with the on-page anchor it scrolls to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub label: Cow<'static, str>,
    pub anchor: Cow<'static, str>,
}

impl NavTarget {
    /// Target pointing at one of the page sections.
    pub const fn section(label: &'static str, section: SectionId) -> Self {
        Self {
            label: Cow::Borrowed(label),
            anchor: Cow::Borrowed(section.anchor()),
        }
    }

    /// Target whose anchor is the lowercased label ("Players" -> "#players").
    /// The anchor may not exist on the page.
    pub fn from_label(label: &str) -> Self {
        Self {
            label: Cow::Owned(label.to_string()),
            anchor: Cow::Owned(label.to_lowercase()),
        }
    }

    /// `href` attribute value for the rendered link.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Header navigation, in display order.
pub const NAV_TARGETS: [NavTarget; 5] = [
    NavTarget::section("Home", SectionId::Hero),
    NavTarget::section("News", SectionId::News),
    NavTarget::section("Tournaments", SectionId::Tournaments),
    NavTarget::section("Teams", SectionId::Teams),
    NavTarget::section("Players", SectionId::Players),
];

// -----------------------------------------------------------------------------
// 2. Navigate Action
// -----------------------------------------------------------------------------

/// What a navigation attempt did to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Scrolled,
    MissingAnchor,
    HostUnavailable,
}

/// Scroll to `target` and close the menu.
///
/// Default link handling must already be suppressed by the caller. A missing
/// anchor or an unavailable host leaves the viewport where it is; the menu is
/// closed in every case.
pub fn navigate<H: PageHost + ?Sized>(
    host: &H,
    target: &NavTarget,
    menu: &mut MenuState,
) -> NavOutcome {
    let outcome = match host.scroll_to_anchor(&target.anchor) {
        Ok(true) => NavOutcome::Scrolled,
        Ok(false) => {
            log::debug!("No element for anchor #{}, skipping scroll", target.anchor);
            NavOutcome::MissingAnchor
        }
        Err(err) => {
            log::warn!("Cannot scroll to #{}: {}", target.anchor, err);
            NavOutcome::HostUnavailable
        }
    };
    *menu = MenuState::Closed;
    outcome
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn test_nav_targets() {
        let hrefs: Vec<String> = NAV_TARGETS.iter().map(NavTarget::href).collect();
        assert_eq!(hrefs, vec!["#hero", "#news", "#tournaments", "#teams", "#players"]);
        assert_eq!(NAV_TARGETS[0].label, "Home");
    }

    #[test]
    fn test_from_label() {
        let target = NavTarget::from_label("Rankings");
        assert_eq!(target.anchor, "rankings");
        assert_eq!(target.href(), "#rankings");
    }

    #[test]
    fn test_navigate_closes_open_menu() {
        let host = MockHost::with_anchors(&["news"]);
        for target in [NavTarget::section("News", SectionId::News), NavTarget::from_label("Rankings")] {
            let mut menu = MenuState::Open;
            navigate(&host, &target, &mut menu);
            assert_eq!(menu, MenuState::Closed);
        }
    }

    #[test]
    fn test_navigate_missing_anchor_is_noop() {
        let host = MockHost::with_anchors(&["hero"]);
        let mut menu = MenuState::Open;
        let outcome = navigate(&host, &NavTarget::from_label("Rankings"), &mut menu);
        assert_eq!(outcome, NavOutcome::MissingAnchor);
        assert!(host.scrolled_to().is_empty());
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_navigate_with_menu_closed() {
        let host = MockHost::with_anchors(&["players"]);
        let mut menu = MenuState::Closed;
        let outcome = navigate(&host, &NavTarget::section("Players", SectionId::Players), &mut menu);
        assert_eq!(outcome, NavOutcome::Scrolled);
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_navigate_without_host() {
        let host = MockHost::unavailable();
        let mut menu = MenuState::Open;
        let outcome = navigate(&host, &NAV_TARGETS[1], &mut menu);
        assert_eq!(outcome, NavOutcome::HostUnavailable);
        assert_eq!(menu, MenuState::Closed);
    }
}
