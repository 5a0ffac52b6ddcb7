//! Turns window events into queued game events.

use std::collections::VecDeque;

use hashbrown::HashMap;
use stacker_game::GameEvent;
use winit::event::{ElementState, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::action::{ActionMap, InputBinding, Trigger};
use crate::button_state::ButtonState;

/// Input manager that queues game events for the next frame.
///
/// # Usage
///
/// ```ignore
/// // In on_event
/// fn on_event(&mut self, event: &WindowEvent) -> bool {
///     self.input.process_window_event(event)
/// }
///
/// // In update
/// fn update(&mut self, ctx: &AppContext, frame: &FrameContext) {
///     for event in self.input.drain_events() {
///         self.session.enqueue(event);
///     }
///     self.session.frame();
/// }
/// ```
#[derive(Debug)]
pub struct InputManager {
    actions: ActionMap,
    states: HashMap<InputBinding, ButtonState>,
    queued: VecDeque<GameEvent>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::with_actions(ActionMap::standard())
    }
}

impl InputManager {
    /// Create an input manager with the standard bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_actions(actions: ActionMap) -> Self {
        Self {
            actions,
            states: HashMap::new(),
            queued: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Get a mutable reference to the action map for runtime rebinding.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                if event.repeat {
                    return true;
                }
                self.apply(InputBinding::Key(code), event.state);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.apply(InputBinding::Mouse(*button), *state);
                true
            }
            WindowEvent::Touch(touch) => {
                match touch.phase {
                    TouchPhase::Started => self.press(InputBinding::Touch),
                    TouchPhase::Ended => self.release(InputBinding::Touch),
                    TouchPhase::Cancelled => self.cancel(InputBinding::Touch),
                    TouchPhase::Moved => {}
                }
                true
            }
            WindowEvent::Focused(false) => {
                self.clear();
                false
            }
            _ => false,
        }
    }

    fn apply(&mut self, input: InputBinding, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(input),
            ElementState::Released => self.release(input),
        }
    }

    /// Register a press of `input`.
    pub fn press(&mut self, input: InputBinding) {
        if self.states.entry(input).or_default().press() {
            self.fire(input, Trigger::Press);
        }
    }

    /// Register a release of `input`.
    pub fn release(&mut self, input: InputBinding) {
        if self.states.entry(input).or_default().release() {
            self.fire(input, Trigger::Release);
        }
    }

    /// Forget a held input without firing release bindings.
    pub fn cancel(&mut self, input: InputBinding) {
        self.states.remove(&input);
    }

    fn fire(&mut self, input: InputBinding, edge: Trigger) {
        if let Some(binding) = self.actions.get(input) {
            if binding.trigger == edge {
                tracing::trace!(?input, event = ?binding.event, "input");
                self.queued.push_back(binding.event);
            }
        }
    }

    /// Returns `true` if the input is held down.
    #[must_use]
    pub fn is_pressed(&self, input: InputBinding) -> bool {
        self.states.get(&input).is_some_and(|s| s.is_pressed())
    }

    /// Number of events waiting to be drained.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    /// Take every queued event in arrival order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.queued.drain(..)
    }

    /// Release every input and drop queued events.
    pub fn clear(&mut self) {
        self.states.clear();
        self.queued.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    const LEFT: InputBinding = InputBinding::Mouse(MouseButton::Left);
    const SPACE: InputBinding = InputBinding::Key(KeyCode::Space);

    #[test]
    fn click_fires_on_release() {
        let mut input = InputManager::new();

        input.press(LEFT);
        assert_eq!(input.pending(), 0);
        assert!(input.is_pressed(LEFT));

        input.release(LEFT);
        assert_eq!(input.drain_events().collect::<Vec<_>>(), [GameEvent::Activate]);
        assert_eq!(input.pending(), 0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = InputManager::new();
        input.release(LEFT);
        assert_eq!(input.pending(), 0);
    }

    #[test]
    fn key_fires_once_while_held() {
        let mut input = InputManager::new();

        input.press(SPACE);
        input.press(SPACE);
        input.release(SPACE);

        assert_eq!(input.drain_events().collect::<Vec<_>>(), [GameEvent::Activate]);
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut input = InputManager::new();

        input.press(InputBinding::Key(KeyCode::KeyR));
        input.press(SPACE);

        assert_eq!(
            input.drain_events().collect::<Vec<_>>(),
            [GameEvent::Restart, GameEvent::Activate]
        );
    }

    #[test]
    fn cancelled_touch_does_not_fire() {
        let mut input = InputManager::new();

        input.press(InputBinding::Touch);
        input.cancel(InputBinding::Touch);
        input.release(InputBinding::Touch);
        assert_eq!(input.pending(), 0);

        input.press(InputBinding::Touch);
        input.release(InputBinding::Touch);
        assert_eq!(input.pending(), 1);
    }

    #[test]
    fn unbound_inputs_are_tracked_but_silent() {
        let mut input = InputManager::with_actions(ActionMap::new());

        input.press(SPACE);
        input.release(SPACE);

        assert_eq!(input.pending(), 0);
        assert!(!input.is_pressed(SPACE));
    }

    #[test]
    fn clear_drops_everything() {
        let mut input = InputManager::new();
        input.press(SPACE);
        input.press(LEFT);

        input.clear();

        assert_eq!(input.pending(), 0);
        assert!(!input.is_pressed(LEFT));
    }
}
