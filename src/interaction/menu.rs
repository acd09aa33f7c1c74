/// Things that can happen to the mobile navigation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    Resize,
    Scroll,
    LinkSelected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => Self { open: !self.open },
            // Any of these dismiss the panel; closing a closed menu is a no-op.
            MenuEvent::Resize | MenuEvent::Scroll | MenuEvent::LinkSelected => {
                Self { open: false }
            }
        }
    }

    /// Resize and scroll listeners are only worth having while the panel is showing.
    pub fn wants_dismiss_listeners(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_closes() {
        let menu = MenuState::default().apply(MenuEvent::Toggle);
        assert!(menu.open);
        assert!(!menu.apply(MenuEvent::Toggle).open);
    }

    #[test]
    fn resize_and_scroll_dismiss_open_menu() {
        let open = MenuState { open: true };
        assert!(!open.apply(MenuEvent::Resize).open);
        assert!(!open.apply(MenuEvent::Scroll).open);
        assert!(!open.apply(MenuEvent::LinkSelected).open);
    }

    #[test]
    fn dismissal_is_idempotent() {
        let open = MenuState { open: true };
        let once = open.apply(MenuEvent::Scroll);
        let twice = once.apply(MenuEvent::Scroll).apply(MenuEvent::Resize);
        assert_eq!(once, twice);
        assert_eq!(MenuState::default().apply(MenuEvent::Resize), MenuState::default());
    }

    #[test]
    fn listeners_only_while_open() {
        assert!(!MenuState::default().wants_dismiss_listeners());
        assert!(MenuState { open: true }.wants_dismiss_listeners());
    }
}
