mod state;

use crossterm::event::KeyCode;

pub use state::{App, ConfirmPopup, NewCategoryPopup, PendingAction, RenameCategoryPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Categories,
    Inputs,
    Submit,
    Help,
}

/// Views reachable from the tab bar, in display order.
pub const TABS: [AppView; 3] = [AppView::Categories, AppView::Inputs, AppView::Submit];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    TabBar,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTab {
    Text,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Footer message left by the last action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}
