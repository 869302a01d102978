// =============================================================================
// CS:GO Pro Web - Page State
// =============================================================================
// Table of Contents:
// 1. Page State
// 2. Scroll Actions
// 3. Menu & Navigation Actions
// 4. Reveal Actions
// 5. Tests
// =============================================================================

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::host::PageHost;
use crate::interaction::{
    navigate, MenuState, NavOutcome, NavTarget, ObserveOptions, ScrollState, SectionId,
    SectionVisibility,
};

// -----------------------------------------------------------------------------
// 1. Page State
// -----------------------------------------------------------------------------

/// Transient page-chrome state provided via Leptos context.
///
/// Each signal has exactly one writer: the scroll listener owns `scroll`, the
/// menu toggle and nav links own `menu`, and each section's viewport observer
/// owns its entry in `visibility`.
#[derive(Clone, Copy)]
pub struct PageState {
    pub scroll: RwSignal<ScrollState>,
    pub menu: RwSignal<MenuState>,
    pub visibility: RwSignal<SectionVisibility>,
    scroll_threshold: f64,
    reveal_margin: f64,
    stagger_interval: f64,
}

impl PageState {
    /// Create page state for a freshly loaded page.
    pub fn new(config: &PageConfig) -> Self {
        Self {
            scroll: RwSignal::new(ScrollState::Top),
            menu: RwSignal::new(MenuState::Closed),
            visibility: RwSignal::new(SectionVisibility::default()),
            scroll_threshold: config.scroll_threshold,
            reveal_margin: config.reveal_margin,
            stagger_interval: config.stagger_interval,
        }
    }

    pub fn stagger_interval(&self) -> f64 {
        self.stagger_interval
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions::with_margin(self.reveal_margin)
    }
}

// -----------------------------------------------------------------------------
// 2. Scroll Actions
// -----------------------------------------------------------------------------

impl PageState {
    /// Whether the header should use its scrolled treatment (tracked).
    pub fn is_scrolled(&self) -> bool {
        self.scroll.get().is_scrolled()
    }

    /// Apply a scroll offset. Subscribers are only notified on a transition.
    pub fn on_scroll(&self, offset: f64) {
        let current = self.scroll.get_untracked();
        if let Some(next) = current.next(offset, self.scroll_threshold) {
            log::debug!("Header {:?} -> {:?} at offset {}", current, next, offset);
            self.scroll.set(next);
        }
    }

    /// Re-read the offset from the host, e.g. after a reload restored scroll.
    pub fn sync_scroll<H: PageHost + ?Sized>(&self, host: &H) {
        match host.scroll_offset() {
            Ok(offset) => self.on_scroll(offset),
            Err(err) => log::warn!("Cannot read scroll offset: {}", err),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Menu & Navigation Actions
// -----------------------------------------------------------------------------

impl PageState {
    /// Whether the mobile menu is open (tracked).
    pub fn is_menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| *menu = menu.toggled());
    }

    /// Scroll to `target` and close the menu.
    pub fn navigate<H: PageHost + ?Sized>(&self, host: &H, target: &NavTarget) -> NavOutcome {
        let mut menu = self.menu.get_untracked();
        let outcome = navigate(host, target, &mut menu);
        if self.menu.get_untracked() != menu {
            self.menu.set(menu);
        }
        outcome
    }
}

// -----------------------------------------------------------------------------
// 4. Reveal Actions
// -----------------------------------------------------------------------------

impl PageState {
    /// Whether `section` has entered the viewport (tracked).
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.visibility.with(|v| v.has_entered(section))
    }

    /// Record the first viewport entry of `section`. Later calls are ignored.
    pub fn reveal(&self, section: SectionId) {
        if self.visibility.with_untracked(|v| v.has_entered(section)) {
            return;
        }
        log::debug!("Section #{} entered viewport", section.anchor());
        self.visibility.update(|v| {
            v.mark_entered(section);
        });
    }
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    fn page_state() -> (Owner, PageState) {
        let owner = Owner::new();
        owner.set();
        (owner, PageState::new(&PageConfig::default()))
    }

    #[test]
    fn test_initial_state() {
        let (_owner, state) = page_state();
        assert_eq!(state.scroll.get_untracked(), ScrollState::Top);
        assert_eq!(state.menu.get_untracked(), MenuState::Closed);
        assert!(!state.visibility.with_untracked(|v| v.has_entered(SectionId::News)));
        assert_eq!(state.observe_options().root_margin(), "-100px");
    }

    #[test]
    fn test_scroll_sequence() {
        let (_owner, state) = page_state();
        let mut seen = Vec::new();
        for offset in [0.0, 60.0, 40.0, 80.0] {
            state.on_scroll(offset);
            seen.push(state.scroll.get_untracked());
        }
        assert_eq!(
            seen,
            vec![
                ScrollState::Top,
                ScrollState::Scrolled,
                ScrollState::Top,
                ScrollState::Scrolled
            ]
        );
    }

    #[test]
    fn test_sync_scroll_reads_host() {
        let (_owner, state) = page_state();
        let host = MockHost::with_anchors(&[]);
        host.set_offset(320.0);
        state.sync_scroll(&host);
        assert!(state.scroll.get_untracked().is_scrolled());

        // No window: state is left alone
        state.sync_scroll(&MockHost::unavailable());
        assert!(state.scroll.get_untracked().is_scrolled());
    }

    #[test]
    fn test_landing_scenario() {
        let (_owner, state) = page_state();
        let host = MockHost::with_anchors(&["hero", "news", "tournaments", "teams", "players"]);

        state.on_scroll(200.0);
        assert_eq!(state.scroll.get_untracked(), ScrollState::Scrolled);

        state.toggle_menu();
        assert_eq!(state.menu.get_untracked(), MenuState::Open);

        let outcome = state.navigate(&host, &NavTarget::section("News", SectionId::News));
        assert_eq!(outcome, NavOutcome::Scrolled);
        assert_eq!(host.scrolled_to(), vec!["news".to_string()]);
        assert_eq!(state.menu.get_untracked(), MenuState::Closed);
    }

    #[test]
    fn test_navigate_missing_anchor_closes_menu() {
        let (_owner, state) = page_state();
        let host = MockHost::with_anchors(&["news"]);
        state.toggle_menu();
        let outcome = state.navigate(&host, &NavTarget::from_label("Rankings"));
        assert_eq!(outcome, NavOutcome::MissingAnchor);
        assert_eq!(state.menu.get_untracked(), MenuState::Closed);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let (_owner, state) = page_state();
        state.reveal(SectionId::Teams);
        state.reveal(SectionId::Teams);
        assert!(state.visibility.with_untracked(|v| v.has_entered(SectionId::Teams)));
        assert!(!state.visibility.with_untracked(|v| v.has_entered(SectionId::News)));
    }
}
