/// Logical state of the linked-account button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Unlinked,
    /// Transient sub-state of `Unlinked` while a fetch is in flight.
    Loading { username: String },
    Linked { username: String },
}

impl LinkState {
    #[cfg(test)]
    pub fn is_linked(&self) -> bool {
        matches!(self, LinkState::Linked { .. })
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LinkState::Loading { .. })
    }
}

/// Label shown on the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Add,
    Loading,
    Remove,
}

impl ButtonAction {
    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::Add => "ADD",
            ButtonAction::Loading => "LOADING",
            ButtonAction::Remove => "REMOVE",
        }
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a frontend needs to draw the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub action: ButtonAction,
    pub enabled: bool,
    /// Linked username, empty when unlinked.
    pub username: String,
}

impl From<&LinkState> for ButtonView {
    fn from(state: &LinkState) -> Self {
        match state {
            LinkState::Unlinked => ButtonView {
                action: ButtonAction::Add,
                enabled: true,
                username: String::new(),
            },
            LinkState::Loading { .. } => ButtonView {
                action: ButtonAction::Loading,
                enabled: false,
                username: String::new(),
            },
            LinkState::Linked { username } => ButtonView {
                action: ButtonAction::Remove,
                enabled: true,
                username: username.clone(),
            },
        }
    }
}
