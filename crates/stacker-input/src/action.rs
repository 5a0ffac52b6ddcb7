//! Mapping from physical inputs to game events.

use hashbrown::HashMap;
use stacker_game::GameEvent;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// A physical input that can be bound to a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// A keyboard key.
    Key(KeyCode),
    /// A mouse button.
    Mouse(MouseButton),
    /// Any touch on the window.
    Touch,
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputBinding {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Edge of the input that fires the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Fire when the input goes down.
    Press,
    /// Fire when a held input comes back up, like a click or touch end.
    Release,
}

/// A bound event and when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub event: GameEvent,
    pub trigger: Trigger,
}

/// Maps inputs to game events. Each input maps to at most one event.
#[derive(Debug, Default, Clone)]
pub struct ActionMap {
    bindings: HashMap<InputBinding, Binding>,
}

impl ActionMap {
    /// Create an empty action map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an action map with a builder pattern.
    #[must_use]
    pub fn builder() -> ActionMapBuilder {
        ActionMapBuilder::new()
    }

    /// Bind an input, replacing any previous binding for it.
    pub fn bind(&mut self, input: impl Into<InputBinding>, event: GameEvent, trigger: Trigger) {
        self.bindings.insert(input.into(), Binding { event, trigger });
    }

    /// Remove the binding for an input.
    pub fn unbind(&mut self, input: InputBinding) {
        self.bindings.remove(&input);
    }

    /// The binding for an input.
    #[must_use]
    pub fn get(&self, input: InputBinding) -> Option<Binding> {
        self.bindings.get(&input).copied()
    }

    /// Inputs bound to `event`.
    pub fn inputs_for(&self, event: GameEvent) -> impl Iterator<Item = InputBinding> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, b)| b.event == event)
            .map(|(input, _)| *input)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Click or touch release and Space drop the block. R or Enter restart.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .bind(MouseButton::Left, GameEvent::Activate, Trigger::Release)
            .bind(InputBinding::Touch, GameEvent::Activate, Trigger::Release)
            .bind(KeyCode::Space, GameEvent::Activate, Trigger::Press)
            .bind(KeyCode::KeyR, GameEvent::Restart, Trigger::Press)
            .bind(KeyCode::Enter, GameEvent::Restart, Trigger::Press)
            .build()
    }
}

/// Builder for creating an action map with a fluent API.
#[derive(Debug, Default)]
pub struct ActionMapBuilder {
    actions: ActionMap,
}

impl ActionMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bind(mut self, input: impl Into<InputBinding>, event: GameEvent, trigger: Trigger) -> Self {
        self.actions.bind(input, event, trigger);
        self
    }

    #[must_use]
    pub fn build(self) -> ActionMap {
        self.actions
    }
}
