// =============================================================================
// CS:GO Pro Web - Mobile Menu State
// =============================================================================

/// Mobile navigation menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after the menu toggle button is pressed.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggled(), MenuState::Open);
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
    }
}
