use std::collections::VecDeque;

use tokio::runtime::Runtime;

use crate::adapters::http::fetch_task::FetchTask;
use crate::core::errors::Result;
use crate::core::models::alert::Alert;
use crate::core::services::link_service::{Effect, LinkEvent, LinkService, PROMPT_TITLE};
use crate::core::traits::frontend::Frontend;
use crate::core::traits::key_fetcher::KeyFetcher;
use crate::core::traits::param_store::ParamStore;

/// Runs the link control against a frontend: dispatches UI events and
/// carries out the effects they produce, all on the calling thread.
pub struct LinkSession<P, F, U>
where
    P: ParamStore,
    F: KeyFetcher + Clone + Send + Sync + 'static,
    U: Frontend,
{
    service: LinkService<P>,
    fetcher: F,
    frontend: U,
    runtime: Runtime,
    last_alert: Option<Alert>,
}

impl<P, F, U> LinkSession<P, F, U>
where
    P: ParamStore,
    F: KeyFetcher + Clone + Send + Sync + 'static,
    U: Frontend,
{
    pub fn new(service: LinkService<P>, fetcher: F, frontend: U) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            service,
            fetcher,
            frontend,
            runtime,
            last_alert: None,
        })
    }

    pub fn service(&self) -> &LinkService<P> {
        &self.service
    }

    #[cfg(test)]
    pub fn frontend(&self) -> &U {
        &self.frontend
    }

    /// Alert raised by the most recent click, if any.
    pub fn last_alert(&self) -> Option<&Alert> {
        self.last_alert.as_ref()
    }

    /// Draw the current state.
    pub fn render(&mut self) -> Result<()> {
        self.frontend.render(&self.service.view())
    }

    /// Deliver one click and run it to completion.
    pub fn click(&mut self) -> Result<()> {
        self.last_alert = None;
        let effects = self.service.handle(LinkEvent::Clicked)?;
        self.run(effects)
    }

    fn run(&mut self, effects: Vec<Effect>) -> Result<()> {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            let next = self.perform(effect)?;
            queue.extend(next);
        }
        Ok(())
    }

    fn perform(&mut self, effect: Effect) -> Result<Vec<Effect>> {
        match effect {
            Effect::PromptUsername => {
                let event = match self.frontend.prompt_text(PROMPT_TITLE)? {
                    Some(text) => LinkEvent::UsernameSubmitted(text),
                    None => LinkEvent::PromptDismissed,
                };
                self.service.handle(event)
            }
            Effect::StartFetch { username } => {
                let task = FetchTask::spawn(&self.runtime, &self.fetcher, &username);
                let outcome = task.wait(&self.runtime);
                self.service
                    .handle(LinkEvent::FetchFinished { username, outcome })
            }
            Effect::Alert(alert) => {
                self.frontend.alert(&alert)?;
                self.last_alert = Some(alert);
                Ok(Vec::new())
            }
            Effect::Render => {
                self.render()?;
                Ok(Vec::new())
            }
        }
    }
}
