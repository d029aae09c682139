use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;

use crate::api::{CategoryStore, InputStore};
use crate::code::CodeAllocator;
use crate::import::{self, ImportOptions};
use crate::types::{Category, CategoryDraft, CategoryId, InputId, UserInput};

use super::{AppEvent, AppView, FocusMode, Status, StatusKind, SubmitTab, TABS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    categories_api: Box<dyn CategoryStore>,
    inputs_api: Box<dyn InputStore>,
    allocator: CodeAllocator,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub focus_mode: FocusMode,
    pub selected_tab_index: usize,
    /// Mirrors the store, in the order the store returned it.
    pub categories: Vec<Category>,
    pub inputs: Vec<UserInput>,
    pub inputs_error: Option<String>,
    pub status: Option<Status>,
    pub selected_category_index: usize,
    pub selected_input_index: usize,
    pub expanded_inputs: HashSet<InputId>,
    pub submit_tab: SubmitTab,
    pub submit_editing: bool,
    pub text_input: String,
    pub csv_path: String,
    pub last_synced: Option<DateTime<Local>>,
    pub new_category_popup: Option<NewCategoryPopup>,
    pub rename_popup: Option<RenameCategoryPopup>,
    pub confirm_popup: Option<ConfirmPopup>,
}

#[derive(Clone, Debug, Default)]
pub struct NewCategoryPopup {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct RenameCategoryPopup {
    pub index: usize,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    DeleteCategory(CategoryId),
    DeleteInput(InputId),
}

#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub message: String,
    pub action: PendingAction,
}

impl App {
    pub fn new(
        categories_api: Box<dyn CategoryStore>,
        inputs_api: Box<dyn InputStore>,
        allocator: CodeAllocator,
    ) -> Self {
        let mut app = Self {
            running: true,
            categories_api,
            inputs_api,
            allocator,
            view: AppView::Categories,
            view_history: Vec::new(),
            focus_mode: FocusMode::Content,
            selected_tab_index: 0,
            categories: Vec::new(),
            inputs: Vec::new(),
            inputs_error: None,
            status: None,
            selected_category_index: 0,
            selected_input_index: 0,
            expanded_inputs: HashSet::new(),
            submit_tab: SubmitTab::Text,
            submit_editing: false,
            text_input: String::new(),
            csv_path: String::new(),
            last_synced: None,
            new_category_popup: None,
            rename_popup: None,
            confirm_popup: None,
        };

        app.load_categories();
        app.load_inputs();

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.new_category_popup.is_some() {
            self.handle_new_category_key(key);
            return;
        }
        if self.rename_popup.is_some() {
            self.handle_rename_key(key);
            return;
        }
        if self.submit_editing {
            self.handle_submit_edit_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') => self.navigate_to(AppView::Categories),
            KeyCode::Char('i') => self.navigate_to(AppView::Inputs),
            KeyCode::Char('s') => self.navigate_to(AppView::Submit),
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Tab => {
                if self.focus_mode == FocusMode::TabBar {
                    self.focus_mode = FocusMode::Content;
                } else {
                    self.focus_mode = FocusMode::TabBar;
                }
            }
            KeyCode::BackTab => {
                if self.view == AppView::Submit {
                    self.toggle_submit_tab();
                }
            }
            KeyCode::Char('r') => self.load_content_for_view(),
            KeyCode::Left => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_left();
                }
            }
            KeyCode::Right => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_right();
                }
            }
            KeyCode::Up => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_up();
                }
            }
            KeyCode::Down => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_down();
                }
            }
            KeyCode::Enter => {
                if self.focus_mode == FocusMode::TabBar {
                    self.activate_selected_tab();
                } else {
                    self.open_selected();
                }
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('n') => {
                if self.view == AppView::Categories {
                    self.open_new_category_popup();
                }
            }
            KeyCode::Char('e') => {
                if self.view == AppView::Categories {
                    self.open_rename_popup();
                }
            }
            KeyCode::Char('d') => self.open_delete_confirm(),
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view.clone());
            self.view = view;
            self.submit_editing = false;
            self.clear_status();
            self.load_content_for_view();
            if let Some(index) = TABS.iter().position(|v| *v == self.view) {
                self.selected_tab_index = index;
            }
        }
    }

    fn load_content_for_view(&mut self) {
        match self.view {
            AppView::Categories => self.load_categories(),
            AppView::Inputs => self.load_inputs(),
            AppView::Submit | AppView::Help => {}
        }
    }

    fn navigate_tab_left(&mut self) {
        if self.selected_tab_index == 0 {
            self.selected_tab_index = TABS.len() - 1;
        } else {
            self.selected_tab_index -= 1;
        }
    }

    fn navigate_tab_right(&mut self) {
        self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
    }

    fn activate_selected_tab(&mut self) {
        let target_view = TABS[self.selected_tab_index].clone();
        self.navigate_to(target_view);
        self.focus_mode = FocusMode::Content;
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_history.pop() {
            self.view = prev_view;
            if let Some(index) = TABS.iter().position(|v| *v == self.view) {
                self.selected_tab_index = index;
            }
        }
        self.clear_status();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            message: message.into(),
        });
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Error,
            message: message.into(),
        });
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.message.as_str())
    }

    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_ref().map(|status| status.kind)
    }

    fn toggle_submit_tab(&mut self) {
        self.submit_tab = match self.submit_tab {
            SubmitTab::Text => SubmitTab::Csv,
            SubmitTab::Csv => SubmitTab::Text,
        };
        self.clear_status();
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(popup) = self.confirm_popup.take() {
                    match popup.action {
                        PendingAction::DeleteCategory(id) => {
                            self.delete_category(id);
                        }
                        PendingAction::DeleteInput(id) => {
                            self.delete_input(id);
                        }
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_popup = None;
            }
            _ => {}
        }
    }

    fn handle_new_category_key(&mut self, key: KeyCode) {
        let Some(popup) = self.new_category_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.new_category_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_new_category_popup(),
            KeyCode::Backspace | KeyCode::Delete => {
                popup.name.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    popup.name.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, key: KeyCode) {
        let Some(popup) = self.rename_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.rename_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_rename_popup(),
            KeyCode::Backspace | KeyCode::Delete => {
                popup.name.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    popup.name.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_submit_edit_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.submit_editing = false,
            KeyCode::Enter => match self.submit_tab {
                SubmitTab::Text => {
                    let text = self.text_input.clone();
                    self.submit_text(&text);
                }
                SubmitTab::Csv => {
                    let path = self.csv_path.trim().to_string();
                    self.import_csv(Path::new(&path));
                }
            },
            KeyCode::Backspace | KeyCode::Delete => {
                self.submit_field_mut().pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    self.submit_field_mut().push(ch);
                }
            }
            _ => {}
        }
    }

    fn submit_field_mut(&mut self) -> &mut String {
        match self.submit_tab {
            SubmitTab::Text => &mut self.text_input,
            SubmitTab::Csv => &mut self.csv_path,
        }
    }

    pub fn load_categories(&mut self) {
        match self.categories_api.list() {
            Ok(categories) => {
                self.categories = categories;
                self.last_synced = Some(Local::now());
                self.clear_status();
                if self.selected_category_index >= self.categories.len() {
                    self.selected_category_index = self.categories.len().saturating_sub(1);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load categories");
                self.set_error(format!("Failed to load categories: {err}"));
            }
        }
    }

    pub fn load_inputs(&mut self) {
        match self.inputs_api.list() {
            Ok(inputs) => {
                self.inputs = inputs;
                self.inputs_error = None;
                self.last_synced = Some(Local::now());
                self.expanded_inputs
                    .retain(|id| self.inputs.iter().any(|input| input.id == *id));
                if self.selected_input_index >= self.inputs.len() {
                    self.selected_input_index = self.inputs.len().saturating_sub(1);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load user inputs");
                self.inputs_error = Some("Error fetching user inputs".to_string());
            }
        }
    }

    /// Allocates a code and color, then persists the draft.
    /// Returns the canonical record on success; on failure the draft is dropped
    /// and `status` carries the reason.
    pub fn create_category(&mut self, name: &str) -> Option<&Category> {
        let draft = match CategoryDraft::prepare(name, &self.categories, &self.allocator) {
            Ok(draft) => draft,
            Err(err) => {
                self.set_error(err.to_string());
                return None;
            }
        };

        self.categories.push(Category::from(draft.clone()));
        match self.categories_api.create(&draft) {
            Ok(category) => {
                tracing::info!(name = %category.name, code = %category.code, "category created");
                self.set_info(format!("Category {} created.", category.code));
                let index = self.categories.len() - 1;
                self.categories[index] = category;
                self.selected_category_index = index;
                self.categories.last()
            }
            Err(err) => {
                self.categories.pop();
                tracing::warn!(error = %err, code = %draft.code, "failed to create category");
                self.set_error(format!("Failed to create category: {err}"));
                None
            }
        }
    }

    pub fn rename_category(&mut self, index: usize, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.set_error("Category name is required.");
            return false;
        }
        let Some(id) = self.categories.get(index).and_then(|category| category.id) else {
            self.set_error("Category has not been saved yet.");
            return false;
        };
        match self.categories_api.update(id, name) {
            Ok(category) => {
                self.categories[index] = category;
                self.set_info("Category renamed.");
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to rename category");
                self.set_error(format!("Failed to rename category: {err}"));
                false
            }
        }
    }

    pub fn delete_category(&mut self, id: CategoryId) -> bool {
        match self.categories_api.delete(id) {
            Ok(()) => {
                self.categories.retain(|category| category.id != Some(id));
                if self.selected_category_index >= self.categories.len() {
                    self.selected_category_index = self.categories.len().saturating_sub(1);
                }
                self.set_info("Category removed.");
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete category");
                self.set_error(format!("Failed to delete category: {err}"));
                false
            }
        }
    }

    pub fn submit_text(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            self.set_error("Please enter some text before submitting.");
            return false;
        }
        match self.inputs_api.submit(text) {
            Ok(input) => {
                tracing::info!(id = input.id, "input submitted");
                self.inputs.push(input);
                self.text_input.clear();
                self.set_info("Submitted successfully.");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit input");
                self.set_error("Failed to submit input. Please try again.");
                false
            }
        }
    }

    pub fn import_csv(&mut self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            self.set_error("Please enter the path of a CSV file.");
            return false;
        }
        match import::import_csv(path, &ImportOptions::default(), &*self.inputs_api) {
            Ok(report) => {
                let ok = report.failed.is_empty();
                if ok {
                    self.set_info(report.summary());
                } else {
                    self.set_error(report.summary());
                }
                self.inputs.extend(report.submitted);
                if ok {
                    self.csv_path.clear();
                }
                ok
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    pub fn delete_input(&mut self, id: InputId) -> bool {
        match self.inputs_api.delete(id) {
            Ok(()) => {
                self.inputs.retain(|input| input.id != id);
                self.expanded_inputs.remove(&id);
                if self.selected_input_index >= self.inputs.len() {
                    self.selected_input_index = self.inputs.len().saturating_sub(1);
                }
                self.set_info("Input removed.");
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete input");
                self.set_error(format!("Failed to delete input: {err}"));
                false
            }
        }
    }

    pub fn toggle_expanded(&mut self, id: InputId) {
        if !self.expanded_inputs.remove(&id) {
            self.expanded_inputs.insert(id);
        }
    }

    fn move_selection_up(&mut self) {
        match self.view {
            AppView::Categories => {
                if self.categories.is_empty() {
                    return;
                }
                if self.selected_category_index == 0 {
                    self.selected_category_index = self.categories.len() - 1;
                } else {
                    self.selected_category_index -= 1;
                }
            }
            AppView::Inputs => {
                if self.inputs.is_empty() {
                    return;
                }
                if self.selected_input_index == 0 {
                    self.selected_input_index = self.inputs.len() - 1;
                } else {
                    self.selected_input_index -= 1;
                }
            }
            _ => {}
        }
    }

    fn move_selection_down(&mut self) {
        match self.view {
            AppView::Categories => {
                if self.categories.is_empty() {
                    return;
                }
                self.selected_category_index =
                    (self.selected_category_index + 1) % self.categories.len();
            }
            AppView::Inputs => {
                if self.inputs.is_empty() {
                    return;
                }
                self.selected_input_index = (self.selected_input_index + 1) % self.inputs.len();
            }
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        match self.view {
            AppView::Categories => self.open_new_category_popup(),
            AppView::Inputs => {
                if let Some(id) = self.inputs.get(self.selected_input_index).map(|i| i.id) {
                    self.toggle_expanded(id);
                }
            }
            AppView::Submit => {
                self.submit_editing = true;
                self.clear_status();
            }
            AppView::Help => {}
        }
    }

    fn open_new_category_popup(&mut self) {
        self.clear_status();
        self.new_category_popup = Some(NewCategoryPopup::default());
    }

    fn open_rename_popup(&mut self) {
        let Some(category) = self.categories.get(self.selected_category_index) else {
            self.set_error("No category selected.");
            return;
        };
        self.rename_popup = Some(RenameCategoryPopup {
            index: self.selected_category_index,
            name: category.name.clone(),
        });
    }

    fn open_delete_confirm(&mut self) {
        match self.view {
            AppView::Categories => {
                let Some(category) = self.categories.get(self.selected_category_index) else {
                    self.set_error("No category selected.");
                    return;
                };
                let Some(id) = category.id else {
                    self.set_error("Category has not been saved yet.");
                    return;
                };
                self.confirm_popup = Some(ConfirmPopup {
                    message: format!("Remove category {} '{}'?", category.code, category.name),
                    action: PendingAction::DeleteCategory(id),
                });
            }
            AppView::Inputs => {
                let Some(input) = self.inputs.get(self.selected_input_index) else {
                    self.set_error("No input selected.");
                    return;
                };
                self.confirm_popup = Some(ConfirmPopup {
                    message: format!("Remove input #{}?", input.id),
                    action: PendingAction::DeleteInput(input.id),
                });
            }
            _ => {}
        }
    }

    fn apply_new_category_popup(&mut self) {
        let Some(popup) = self.new_category_popup.take() else {
            return;
        };
        if self.create_category(&popup.name).is_none() {
            // Keep the popup open so the name can be corrected or retried.
            self.new_category_popup = Some(popup);
        }
    }

    fn apply_rename_popup(&mut self) {
        let Some(popup) = self.rename_popup.take() else {
            return;
        };
        if !self.rename_category(popup.index, &popup.name) {
            self.rename_popup = Some(popup);
        }
    }
}
