//! Centralized shortcut and action system.
//!
//! Key events are mapped to [`Action`]s here; the TUI dispatches actions and
//! the help overlay lists the same bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All actions a user can take on the chord screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Advance to the next key
    NextKey,
    /// Go back to the previous key
    PreviousKey,
    /// Jump back to C
    FirstKey,

    // === DISPLAY ===
    /// Show or hide neighbor previews
    TogglePreviews,
    /// Show or hide the pentatonic panel
    TogglePentatonic,

    // === HELP ===
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Close the help overlay, or quit
    Cancel,
    /// Quit the application
    Quit,
}

impl Action {
    /// Description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NextKey => "Next key",
            Self::PreviousKey => "Previous key",
            Self::FirstKey => "Jump to C",
            Self::TogglePreviews => "Toggle neighbor previews",
            Self::TogglePentatonic => "Toggle pentatonic positions",
            Self::ToggleHelp => "Toggle help",
            Self::Cancel => "Close help / quit",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Short label such as `→`, `Ctrl+c` or `?`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        };

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry mapping key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
    /// Registration order, used for help listings
    order: Vec<(KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Right, M::NONE, Action::NextKey);
        self.register(K::Char('l'), M::NONE, Action::NextKey);
        self.register(K::Char('n'), M::NONE, Action::NextKey);
        self.register(K::Left, M::NONE, Action::PreviousKey);
        self.register(K::Char('h'), M::NONE, Action::PreviousKey);
        self.register(K::Char('p'), M::NONE, Action::PreviousKey);
        self.register(K::Home, M::NONE, Action::FirstKey);

        // === DISPLAY ===
        self.register(K::Char('v'), M::NONE, Action::TogglePreviews);
        self.register(K::Char('f'), M::NONE, Action::TogglePentatonic);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Esc, M::NONE, Action::Cancel);
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert(binding, action);
        self.order.push((binding, action));
    }

    /// Look up the action for a key event.
    ///
    /// `?` arrives with SHIFT on some terminals, so a lone SHIFT on a
    /// character key is ignored when the exact binding is absent.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&binding).copied().or_else(|| {
            if matches!(binding.code, KeyCode::Char(_)) && binding.modifiers == KeyModifiers::SHIFT {
                self.bindings
                    .get(&KeyBinding::new(binding.code, KeyModifiers::NONE))
                    .copied()
            } else {
                None
            }
        })
    }

    /// Bindings grouped per action, in registration order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Action, Vec<KeyBinding>)> {
        let mut groups: Vec<(Action, Vec<KeyBinding>)> = Vec::new();
        for (binding, action) in &self.order {
            match groups.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) => keys.push(*binding),
                None => groups.push((*action, vec![*binding])),
            }
        }
        groups
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::NextKey));

        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::PreviousKey));

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(event), Some(Action::Quit));
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            Some(Action::PreviousKey)
        );
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(Action::NextKey)
        );
    }

    #[test]
    fn test_shifted_question_mark() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(event), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_unbound_key() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);

        // Plain 'c' is not quit
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);
    }

    #[test]
    fn test_grouped_bindings() {
        let registry = ShortcutRegistry::new();
        let groups = registry.grouped();

        assert_eq!(groups[0].0, Action::NextKey);
        let labels: Vec<String> = groups[0].1.iter().map(KeyBinding::label).collect();
        assert_eq!(labels, vec!["→", "l", "n"]);

        let quit = groups.iter().find(|(a, _)| *a == Action::Quit).unwrap();
        assert!(quit.1.iter().any(|b| b.label() == "Ctrl+c"));
    }
}
