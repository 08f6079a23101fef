use crate::roster::RosterRow;
use async_trait::async_trait;
use std::fmt::Debug;

/// Which action buttons the form shows. Derived from the session mode, never
/// set directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonState {
    pub save: bool,
    pub update: bool,
    pub cancel: bool,
}

impl ButtonState {
    pub fn create_mode() -> Self {
        ButtonState { save: true, update: false, cancel: false }
    }

    pub fn edit_mode() -> Self {
        ButtonState { save: false, update: true, cancel: true }
    }
}

/// The blocking interactions and render targets of the form's UI surface.
#[async_trait]
pub trait FormUi: Debug + Send + Sync {
    /// Asks the user for a location name. `None` means the user backed out,
    /// which aborts the save without an error.
    async fn location_name(&self) -> Option<String>;

    async fn alert(&self, message: &str);

    async fn confirm(&self, message: &str) -> bool;

    fn render_roster(&self, rows: &[RosterRow]);

    fn set_buttons(&self, buttons: ButtonState);
}
