//! In-memory stand-ins for the labeling service.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use labelr::api::{ApiError, CategoryStore, InputStore};
use labelr::app::App;
use labelr::code::{CodeAllocator, ExhaustionPolicy};
use labelr::types::{Category, CategoryDraft, CategoryId, InputId, UserInput};

#[derive(Default)]
pub struct ServiceState {
    pub categories: Vec<Category>,
    pub inputs: Vec<UserInput>,
    pub next_id: u32,
    pub created: Vec<CategoryDraft>,
    pub submitted: Vec<String>,
    pub fail_writes: bool,
    pub fail_list: bool,
}

pub type Shared = Rc<RefCell<ServiceState>>;

fn unavailable() -> ApiError {
    ApiError::Status {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: "not found".to_string(),
    }
}

pub struct FakeCategories(pub Shared);
pub struct FakeInputs(pub Shared);

impl CategoryStore for FakeCategories {
    fn list(&self) -> Result<Vec<Category>, ApiError> {
        let state = self.0.borrow();
        if state.fail_list {
            return Err(unavailable());
        }
        Ok(state.categories.clone())
    }

    fn create(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let mut state = self.0.borrow_mut();
        state.created.push(draft.clone());
        if state.fail_writes {
            return Err(unavailable());
        }
        state.next_id += 1;
        let category = Category {
            id: Some(state.next_id),
            name: draft.name.clone(),
            code: draft.code.clone(),
            color: draft.color.clone(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    fn update(&self, id: CategoryId, name: &str) -> Result<Category, ApiError> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(unavailable());
        }
        let category = state
            .categories
            .iter_mut()
            .find(|category| category.id == Some(id))
            .ok_or_else(not_found)?;
        category.name = name.to_string();
        Ok(category.clone())
    }

    fn delete(&self, id: CategoryId) -> Result<(), ApiError> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(unavailable());
        }
        let before = state.categories.len();
        state.categories.retain(|category| category.id != Some(id));
        if state.categories.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

impl InputStore for FakeInputs {
    fn list(&self) -> Result<Vec<UserInput>, ApiError> {
        let state = self.0.borrow();
        if state.fail_list {
            return Err(unavailable());
        }
        Ok(state.inputs.clone())
    }

    fn submit(&self, text: &str) -> Result<UserInput, ApiError> {
        let mut state = self.0.borrow_mut();
        state.submitted.push(text.to_string());
        if state.fail_writes {
            return Err(unavailable());
        }
        state.next_id += 1;
        let input = UserInput {
            id: state.next_id,
            input_data: text.to_string(),
            categories: Vec::new(),
        };
        state.inputs.push(input.clone());
        Ok(input)
    }

    fn delete(&self, id: InputId) -> Result<(), ApiError> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(unavailable());
        }
        state.inputs.retain(|input| input.id != id);
        Ok(())
    }
}

pub fn category(id: u32, name: &str, code: &str) -> Category {
    Category {
        id: Some(id),
        name: name.to_string(),
        code: code.to_string(),
        color: "hsl(200, 80%, 45%)".to_string(),
    }
}

pub fn input(id: u32, text: &str) -> UserInput {
    UserInput {
        id,
        input_data: text.to_string(),
        categories: Vec::new(),
    }
}

pub fn service(categories: Vec<Category>, inputs: Vec<UserInput>) -> Shared {
    let next_id = categories
        .iter()
        .filter_map(|category| category.id)
        .chain(inputs.iter().map(|input| input.id))
        .max()
        .unwrap_or(0);
    Rc::new(RefCell::new(ServiceState {
        categories,
        inputs,
        next_id,
        ..ServiceState::default()
    }))
}

pub fn app_with(shared: &Shared, policy: ExhaustionPolicy) -> App {
    App::new(
        Box::new(FakeCategories(shared.clone())),
        Box::new(FakeInputs(shared.clone())),
        CodeAllocator::new(policy),
    )
}

pub fn app(shared: &Shared) -> App {
    app_with(shared, ExhaustionPolicy::Saturate)
}
