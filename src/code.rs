/// Short category codes (`A00` .. `Z99`) and their sequential allocation.
use std::fmt;
use std::str::FromStr;

use crate::types::Category;

/// A code of the form `<A-Z><00-99>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryCode {
    letter: char,
    number: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid category code {0:?}: expected a letter A-Z followed by two digits")]
pub struct ParseCodeError(pub String);

impl CategoryCode {
    pub const FIRST: CategoryCode = CategoryCode { letter: 'A', number: 0 };
    pub const LAST: CategoryCode = CategoryCode { letter: 'Z', number: 99 };

    pub fn new(letter: char, number: u8) -> Option<Self> {
        if letter.is_ascii_uppercase() && number <= 99 {
            Some(Self { letter, number })
        } else {
            None
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// The next code in sequence, or `None` past `Z99`.
    pub fn successor(self) -> Option<Self> {
        if self.number < 99 {
            return Some(Self {
                letter: self.letter,
                number: self.number + 1,
            });
        }
        if self.letter < 'Z' {
            return Some(Self {
                letter: (self.letter as u8 + 1) as char,
                number: 0,
            });
        }
        None
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.letter, self.number)
    }
}

impl FromStr for CategoryCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCodeError(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(err)?;
        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let number = digits.parse::<u8>().map_err(|_| err())?;
        Self::new(letter, number).ok_or_else(err)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("category code space exhausted (last code is {})", CategoryCode::LAST)]
    Exhausted,
    #[error("cannot allocate after malformed code: {0}")]
    MalformedPredecessor(#[from] ParseCodeError),
}

/// What allocation does once `Z99` has been handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExhaustionPolicy {
    /// Keep returning `Z99` and log a warning.
    #[default]
    Saturate,
    /// Refuse with [`AllocationError::Exhausted`].
    Reject,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CodeAllocator {
    policy: ExhaustionPolicy,
}

impl CodeAllocator {
    pub fn new(policy: ExhaustionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Computes the code for a category appended after `existing`.
    pub fn allocate(&self, existing: &[Category]) -> Result<CategoryCode, AllocationError> {
        match try_next_code(existing) {
            Err(AllocationError::Exhausted) if self.policy == ExhaustionPolicy::Saturate => {
                tracing::warn!(
                    "exceeded maximum category code {}, reusing it",
                    CategoryCode::LAST
                );
                Ok(CategoryCode::LAST)
            }
            other => other,
        }
    }
}

/// Successor of the last category's code by list position; `A00` for an empty list.
pub fn try_next_code(existing: &[Category]) -> Result<CategoryCode, AllocationError> {
    let Some(last) = existing.last() else {
        return Ok(CategoryCode::FIRST);
    };
    let predecessor = last.parsed_code()?;
    predecessor.successor().ok_or(AllocationError::Exhausted)
}

/// Saturating form of [`try_next_code`]: past `Z99` it yields `Z99` again.
pub fn next_code(existing: &[Category]) -> Result<CategoryCode, AllocationError> {
    CodeAllocator::default().allocate(existing)
}
