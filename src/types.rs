use serde::{Deserialize, Serialize};

use crate::code::{AllocationError, CategoryCode, CodeAllocator};

pub type CategoryId = u32;
pub type InputId = u32;

/// A category as held by the labeling service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
    /// Kept as the raw string the store returned; parsed on demand so one
    /// bad record does not poison the whole list.
    pub code: String,
    pub color: String,
}

impl Category {
    pub fn parsed_code(&self) -> Result<CategoryCode, crate::code::ParseCodeError> {
        self.code.parse()
    }
}

/// Client-side category that has not been confirmed by the store yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub code: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Category name is required.")]
    EmptyName,
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, code: CategoryCode, color: impl ToString) -> Self {
        Self {
            name: name.into(),
            code: code.to_string(),
            color: color.to_string(),
        }
    }

    /// Trims the name, allocates the code that follows `existing` and picks a color.
    pub fn prepare(
        name: &str,
        existing: &[Category],
        allocator: &CodeAllocator,
    ) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let code = allocator.allocate(existing)?;
        Ok(Self::new(name, code, crate::color::random_color()))
    }
}

impl From<CategoryDraft> for Category {
    fn from(draft: CategoryDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
            code: draft.code,
            color: draft.color,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RenameCategory<'a> {
    pub name: &'a str,
}

/// A submitted text item together with the categories the classifier assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub id: InputId,
    pub input_data: String,
    #[serde(rename = "Categories", default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewUserInput<'a> {
    pub input_data: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_reads_capitalised_categories_key() {
        let json = r##"{
            "id": 7,
            "input_data": "refund please",
            "Categories": [{"id": 1, "name": "Billing", "code": "A00", "color": "#336699"}]
        }"##;
        let input: UserInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.id, 7);
        assert_eq!(input.categories.len(), 1);
        assert_eq!(input.categories[0].code, "A00");
    }

    #[test]
    fn user_input_without_categories_defaults_to_empty() {
        let input: UserInput =
            serde_json::from_str(r#"{"id": 1, "input_data": "hello"}"#).unwrap();
        assert!(input.categories.is_empty());
    }

    #[test]
    fn prepare_trims_and_rejects_blank_names() {
        let allocator = CodeAllocator::default();
        assert_eq!(
            CategoryDraft::prepare("   ", &[], &allocator),
            Err(DraftError::EmptyName)
        );
        let draft = CategoryDraft::prepare("  Billing ", &[], &allocator).unwrap();
        assert_eq!(draft.name, "Billing");
        assert_eq!(draft.code, "A00");
        assert!(draft.color.parse::<crate::color::Hsl>().is_ok());
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = CategoryDraft::new("Spam", "B07".parse().unwrap(), "hsl(10, 80%, 40%)");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["code"], "B07");
        assert_eq!(value["color"], "hsl(10, 80%, 40%)");
        assert!(value.get("id").is_none());
    }
}
