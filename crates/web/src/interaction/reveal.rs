// =============================================================================
// CS:GO Pro Web - Section Reveal
// =============================================================================
// Table of Contents:
// 1. Observe Options
// 2. Intersection Gate
// 3. Section Visibility
// 4. Stagger
// 5. Tests
// =============================================================================

use std::collections::BTreeSet;

use super::SectionId;
use crate::config::DEFAULT_REVEAL_MARGIN;

// -----------------------------------------------------------------------------
// 1. Observe Options
// -----------------------------------------------------------------------------

/// Options for a viewport-entry subscription.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// How far inside the viewport edge an element must be before it counts
    /// as entered, in CSS px.
    pub margin: f64,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_REVEAL_MARGIN,
        }
    }
}

impl ObserveOptions {
    pub fn with_margin(margin: f64) -> Self {
        Self { margin }
    }

    /// `rootMargin` value for an IntersectionObserver. The margin shrinks the
    /// viewport, so it is emitted negated.
    pub fn root_margin(&self) -> String {
        if self.margin == 0.0 {
            "0px".to_string()
        } else {
            format!("{}px", -self.margin)
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Intersection Gate
// -----------------------------------------------------------------------------

/// Filters raw intersection samples down to a single entry notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionGate {
    fired: bool,
}

impl IntersectionGate {
    /// Returns true for the first intersecting sample only.
    pub fn sample(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

// -----------------------------------------------------------------------------
// 3. Section Visibility
// -----------------------------------------------------------------------------

/// Sections that have entered the viewport at least once. Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    entered: BTreeSet<SectionId>,
}

impl SectionVisibility {
    /// Record that `section` entered the viewport. Returns false if it already had.
    pub fn mark_entered(&mut self, section: SectionId) -> bool {
        self.entered.insert(section)
    }

    pub fn has_entered(&self, section: SectionId) -> bool {
        self.entered.contains(&section)
    }
}

// -----------------------------------------------------------------------------
// 4. Stagger
// -----------------------------------------------------------------------------

/// Entrance delay of the `index`-th child, in whole milliseconds.
pub fn stagger_delay_ms(index: usize, interval_secs: f64) -> u32 {
    (index as f64 * interval_secs * 1000.0).round() as u32
}

// -----------------------------------------------------------------------------
// 5. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STAGGER_INTERVAL;

    #[test]
    fn test_root_margin() {
        assert_eq!(ObserveOptions::default().root_margin(), "-100px");
        assert_eq!(ObserveOptions::with_margin(40.0).root_margin(), "-40px");
        assert_eq!(ObserveOptions::with_margin(0.0).root_margin(), "0px");
    }

    #[test]
    fn test_gate_fires_once() {
        let mut gate = IntersectionGate::default();
        let samples = [false, true, false, true, true, false, true];
        let fired: Vec<bool> = samples.iter().map(|s| gate.sample(*s)).collect();
        assert_eq!(fired, vec![false, true, false, false, false, false, false]);
    }

    #[test]
    fn test_gate_ignores_leading_misses() {
        let mut gate = IntersectionGate::default();
        assert!(!gate.sample(false));
        assert!(!gate.sample(false));
        assert!(gate.sample(true));
        assert!(!gate.sample(true));
    }

    #[test]
    fn test_visibility_is_monotonic() {
        let mut visibility = SectionVisibility::default();
        assert!(!visibility.has_entered(SectionId::News));
        assert!(visibility.mark_entered(SectionId::News));
        assert!(!visibility.mark_entered(SectionId::News));
        assert!(visibility.has_entered(SectionId::News));
        assert!(!visibility.has_entered(SectionId::Teams));
        assert_eq!(visibility, {
            let mut only_news = SectionVisibility::default();
            only_news.mark_entered(SectionId::News);
            only_news
        });
    }

    #[test]
    fn test_stagger_delays() {
        let delays: Vec<u32> = (0..4)
            .map(|index| stagger_delay_ms(index, DEFAULT_STAGGER_INTERVAL))
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(stagger_delay_ms(2, 0.25), 500);
    }
}
