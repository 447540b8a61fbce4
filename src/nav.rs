// Mobile menu open/close state. The toggle control flips it; activating
// any nav link closes it.

/// Class both the link list and the toggle carry while the menu is open.
pub const MENU_OPEN_CLASS: &str = "active";

#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        NavMenu { open: false }
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
