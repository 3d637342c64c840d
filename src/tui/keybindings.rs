//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts. The help dialog
//! is rendered from this table.

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Key as shown to the user
    pub keys: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside the editor
    Global,
    /// Moving around a grid
    Grid,
    /// While editing a cell
    Editing,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            KeyContext::Global => "Global Keys",
            KeyContext::Grid => "Tables",
            KeyContext::Editing => "Editing a Cell",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        keys: "q",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "Tab",
        description: "Switch between daily and recap table",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "[ / ]",
        description: "Previous/next date",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "s",
        description: "Save daily expenses CSV",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "S",
        description: "Save recap CSV",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "r",
        description: "Reset both tables",
        context: KeyContext::Global,
    },
    // Grid
    Keybinding {
        keys: "h/j/k/l",
        description: "Move cursor (arrow keys work too)",
        context: KeyContext::Grid,
    },
    Keybinding {
        keys: "g / G",
        description: "Go to top/bottom",
        context: KeyContext::Grid,
    },
    Keybinding {
        keys: "Enter / e",
        description: "Edit cell",
        context: KeyContext::Grid,
    },
    Keybinding {
        keys: "Del / x",
        description: "Clear cell",
        context: KeyContext::Grid,
    },
    // Editing
    Keybinding {
        keys: "Enter",
        description: "Save cell",
        context: KeyContext::Editing,
    },
    Keybinding {
        keys: "Esc",
        description: "Cancel",
        context: KeyContext::Editing,
    },
];

/// Keybindings active in a context
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |kb| kb.context == context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_bindings() {
        for context in [KeyContext::Global, KeyContext::Grid, KeyContext::Editing] {
            assert!(bindings_for(context).count() > 0);
        }
    }
}
