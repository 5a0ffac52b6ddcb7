//! Press/release edge tracking for a single input.

/// Whether an input is currently held.
///
/// [`ButtonState::press`] and [`ButtonState::release`] report whether the
/// call was a real transition, which filters out OS key repeat and releases
/// whose press happened outside the window.
///
/// ```text
/// Released ─press()─> Pressed ─release()─> Released
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Input is held down.
    Pressed,
    /// Input is up.
    #[default]
    Released,
}

impl ButtonState {
    /// Returns `true` if the input is held down.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }

    /// Transition to pressed. Returns `true` on a fresh press.
    #[inline]
    pub fn press(&mut self) -> bool {
        let edge = !self.is_pressed();
        *self = Self::Pressed;
        edge
    }

    /// Transition to released. Returns `true` if the input was held.
    #[inline]
    pub fn release(&mut self) -> bool {
        let edge = self.is_pressed();
        *self = Self::Released;
        edge
    }
}
