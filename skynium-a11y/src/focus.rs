//! Focus trap decisions, independent of how focusable elements are represented.

/// What the keydown listener should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrapAction<H> {
    /// Leave the event to the browser.
    Pass,
    /// Prevent the default and move focus here.
    Wrap(H),
    /// Close the panel.
    Close,
}

/// Focusable elements of a container, captured once when the trap is installed.
#[derive(Debug, Clone)]
pub struct FocusTrap<H> {
    focusables: Vec<H>,
}

impl<H: PartialEq + Clone> FocusTrap<H> {
    #[must_use]
    pub const fn new(focusables: Vec<H>) -> Self {
        Self { focusables }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.focusables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focusables.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&H> {
        self.focusables.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&H> {
        self.focusables.last()
    }

    /// Decide what a keydown with `key` does while `active` holds focus.
    ///
    /// Tab on the last element wraps to the first, Shift+Tab on the first wraps
    /// to the last. Escape closes. Everything else passes through.
    pub fn on_key(&self, key: &str, shift: bool, active: Option<&H>) -> TrapAction<H> {
        match key {
            "Escape" => TrapAction::Close,
            "Tab" => {
                let (Some(first), Some(last)) = (self.first(), self.last()) else {
                    return TrapAction::Pass;
                };
                match (shift, active) {
                    (true, Some(current)) if current == first => TrapAction::Wrap(last.clone()),
                    (false, Some(current)) if current == last => TrapAction::Wrap(first.clone()),
                    _ => TrapAction::Pass,
                }
            }
            _ => TrapAction::Pass,
        }
    }
}
