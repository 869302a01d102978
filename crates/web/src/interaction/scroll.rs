// =============================================================================
// CS:GO Pro Web - Scroll State
// =============================================================================
// Two-state machine driving the header treatment: transparent at the top of
// the page, opaque once the page has scrolled past the threshold.
// =============================================================================

/// Whether the page is scrolled past the header threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    /// State for a vertical offset. Offsets at exactly the threshold count as `Top`.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    /// The new state if `offset` causes a transition, `None` otherwise.
    pub fn next(self, offset: f64, threshold: f64) -> Option<Self> {
        let next = Self::for_offset(offset, threshold);
        (next != self).then_some(next)
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_sequence() {
        let mut state = ScrollState::default();
        let mut seen = Vec::new();
        for offset in [0.0, 60.0, 40.0, 80.0] {
            if let Some(next) = state.next(offset, 50.0) {
                state = next;
            }
            seen.push(state);
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
    fn test_threshold_is_exclusive() {
        assert_eq!(ScrollState::for_offset(50.0, 50.0), ScrollState::Top);
        assert_eq!(ScrollState::for_offset(50.5, 50.0), ScrollState::Scrolled);
        assert_eq!(ScrollState::Scrolled.next(50.0, 50.0), Some(ScrollState::Top));
    }

    #[test]
    fn test_no_transition_when_unchanged() {
        assert_eq!(ScrollState::Top.next(10.0, 50.0), None);
        assert_eq!(ScrollState::Scrolled.next(900.0, 50.0), None);
        // Negative offsets show up during elastic overscroll on some platforms
        assert_eq!(ScrollState::Top.next(-20.0, 50.0), None);
    }
}
