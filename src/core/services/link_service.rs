use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::Result;
use crate::core::models::alert::Alert;
use crate::core::models::fetch_outcome::FetchOutcome;
use crate::core::models::link_state::{ButtonView, LinkState};
use crate::core::models::linked_account::LinkedAccount;
use crate::core::traits::param_store::ParamStore;

/// Parameter holding the linked username.
pub const USERNAME_PARAM: &str = "GithubUsername";

/// Parameter holding the fetched key blob.
pub const KEYS_PARAM: &str = "GithubSshKeys";

/// Title of the username prompt.
pub const PROMPT_TITLE: &str = "Enter your GitHub username";

/// Shown next to the control before the user is prompted.
pub const LINK_WARNING: &str = "Warning: This grants SSH access to all public keys in your \
     GitHub settings. Never enter a GitHub username other than your own. \
     Nobody will ever legitimately ask you to add their GitHub username.";

/// Characters that cannot alter the request path.
static USERNAME_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._-]*$").expect("username pattern compiles")
});

/// One UI event delivered to the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    Clicked,
    UsernameSubmitted(String),
    PromptDismissed,
    FetchFinished {
        username: String,
        outcome: FetchOutcome,
    },
}

/// Work the driver must perform on behalf of the control, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PromptUsername,
    StartFetch { username: String },
    Alert(Alert),
    Render,
}

/// The linked-account button as a state machine.
///
/// `handle` is the single entry point for UI events; it mutates persisted
/// state through the `ParamStore` and returns the effects the driver must
/// carry out. At most one fetch is in flight: clicks are ignored while
/// loading.
pub struct LinkService<P: ParamStore> {
    store: P,
    state: LinkState,
}

impl<P: ParamStore> LinkService<P> {
    /// Build the control from persisted state.
    pub fn new(store: P) -> Result<Self> {
        let mut service = Self {
            store,
            state: LinkState::Unlinked,
        };
        service.refresh()?;
        Ok(service)
    }

    pub fn state(&self) -> &LinkState {
        &self.state
    }

    pub fn view(&self) -> ButtonView {
        ButtonView::from(&self.state)
    }

    #[cfg(test)]
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Re-read persisted fields. Linked only when both are non-empty.
    pub fn refresh(&mut self) -> Result<&LinkState> {
        self.state = match self.account()? {
            Some(account) => LinkState::Linked {
                username: account.username,
            },
            None => LinkState::Unlinked,
        };
        Ok(&self.state)
    }

    /// The persisted account, if both fields are present.
    pub fn account(&self) -> Result<Option<LinkedAccount>> {
        let keys = self.store.get(KEYS_PARAM)?;
        let username = self.store.get(USERNAME_PARAM)?;
        if keys.is_empty() || username.is_empty() {
            return Ok(None);
        }
        Ok(Some(LinkedAccount { username, keys }))
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: LinkEvent) -> Result<Vec<Effect>> {
        match event {
            LinkEvent::Clicked => self.on_click(),
            LinkEvent::UsernameSubmitted(raw) => Ok(self.on_username(&raw)),
            LinkEvent::PromptDismissed => Ok(Vec::new()),
            LinkEvent::FetchFinished { username, outcome } => {
                self.on_fetch_finished(&username, outcome)
            }
        }
    }

    fn on_click(&mut self) -> Result<Vec<Effect>> {
        match &self.state {
            LinkState::Unlinked => Ok(vec![Effect::PromptUsername]),
            LinkState::Loading { username } => {
                tracing::debug!(%username, "click ignored while loading");
                Ok(Vec::new())
            }
            LinkState::Linked { username } => {
                tracing::info!(%username, "unlinking account");
                // Keys first: a half-finished unlink must not read as linked.
                self.store.remove(KEYS_PARAM)?;
                self.store.remove(USERNAME_PARAM)?;
                self.refresh()?;
                Ok(vec![Effect::Render])
            }
        }
    }

    fn on_username(&mut self, raw: &str) -> Vec<Effect> {
        if self.state != LinkState::Unlinked {
            tracing::warn!(state = ?self.state, "username submitted outside of prompt");
            return Vec::new();
        }

        let username = raw.trim();
        if username.is_empty() {
            return Vec::new();
        }

        if !USERNAME_RULE.is_match(username) {
            return vec![
                Effect::Alert(Alert::InvalidUsername {
                    username: username.to_string(),
                }),
                Effect::Render,
            ];
        }

        tracing::debug!(%username, "fetching keys");
        self.state = LinkState::Loading {
            username: username.to_string(),
        };
        vec![
            Effect::Render,
            Effect::StartFetch {
                username: username.to_string(),
            },
        ]
    }

    fn on_fetch_finished(&mut self, username: &str, outcome: FetchOutcome) -> Result<Vec<Effect>> {
        match &self.state {
            LinkState::Loading { username: pending } if pending == username => {}
            other => {
                tracing::warn!(%username, state = ?other, "stale fetch result dropped");
                return Ok(Vec::new());
            }
        }

        let mut effects = Vec::new();
        let persisted = match outcome {
            FetchOutcome::Success(body) if !body.is_empty() => self.persist(username, &body),
            FetchOutcome::Success(_) => {
                effects.push(Effect::Alert(Alert::NoKeys {
                    username: username.to_string(),
                }));
                Ok(())
            }
            FetchOutcome::TimedOut => {
                effects.push(Effect::Alert(Alert::TimedOut));
                Ok(())
            }
            FetchOutcome::NotFound => {
                effects.push(Effect::Alert(Alert::UserNotFound {
                    username: username.to_string(),
                }));
                Ok(())
            }
            FetchOutcome::Failed(reason) => {
                effects.push(Effect::Alert(Alert::RequestFailed { reason }));
                Ok(())
            }
        };

        // Always leave Loading, even when the write failed.
        self.refresh()?;
        persisted?;
        effects.push(Effect::Render);
        Ok(effects)
    }

    fn persist(&self, username: &str, keys: &str) -> Result<()> {
        let previous = self.store.get(USERNAME_PARAM)?;

        // Username first: keys are what make the pair read as linked.
        self.store.put(USERNAME_PARAM, username)?;
        if let Err(e) = self.store.put(KEYS_PARAM, keys) {
            self.restore_username(&previous);
            return Err(e);
        }

        tracing::info!(%username, bytes = keys.len(), "account linked");
        Ok(())
    }

    /// Best-effort rollback after a failed keys write, so the pair is not
    /// left half-written.
    fn restore_username(&self, previous: &str) {
        let rollback = if previous.is_empty() {
            self.store.remove(USERNAME_PARAM)
        } else {
            self.store.put(USERNAME_PARAM, previous)
        };
        if let Err(e) = rollback {
            tracing::warn!(error = %e, "could not roll back username after failed keys write");
        }
    }
}
