//! Mobile navigation menu visibility.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the slide-down mobile menu. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Menu button press.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any menu link press.
    pub fn close(&mut self) {
        self.open = false;
    }
}
