use crate::core::errors::Result;
use crate::core::models::alert::Alert;
use crate::core::models::link_state::ButtonView;

/// Port for the UI surface drawing the control.
pub trait Frontend {
    /// Draw the button and the username label.
    fn render(&mut self, view: &ButtonView) -> Result<()>;

    /// Modal text input. `None` when the user dismisses it.
    fn prompt_text(&mut self, title: &str) -> Result<Option<String>>;

    /// Modal message with no answer.
    fn alert(&mut self, alert: &Alert) -> Result<()>;
}
