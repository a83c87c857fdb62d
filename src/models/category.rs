//! Expense category catalog
//!
//! Categories form a fixed, ordered set. Each has a stable identifier used in
//! storage and on the command line, and a display name for the UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Label of the "nothing selected" entry shown ahead of the catalog
pub const CATEGORY_PLACEHOLDER: &str = "-- Select --";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(rename = "saving")]
    Savings,
    Food,
    Home,
    #[serde(rename = "expenses")]
    Miscellaneous,
    Leisure,
    Health,
    Subscriptions,
}

impl Category {
    /// The catalog in display order
    pub const ALL: [Category; 7] = [
        Category::Savings,
        Category::Food,
        Category::Home,
        Category::Miscellaneous,
        Category::Leisure,
        Category::Health,
        Category::Subscriptions,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Savings => "saving",
            Self::Food => "food",
            Self::Home => "home",
            Self::Miscellaneous => "expenses",
            Self::Leisure => "leisure",
            Self::Health => "health",
            Self::Subscriptions => "subscriptions",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Miscellaneous => "Miscellaneous",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::Subscriptions => "Subscriptions",
        }
    }

    /// Look a category up by id or display name, ignoring case
    ///
    /// The placeholder entry and blank input never match.
    pub fn lookup(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value == CATEGORY_PLACEHOLDER {
            return None;
        }
        Self::ALL.into_iter().find(|c| {
            c.id().eq_ignore_ascii_case(value) || c.name().eq_ignore_ascii_case(value)
        })
    }

    /// Position in the catalog
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Step through the select options: placeholder, then each category, wrapping
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        let len = Self::ALL.len() + 1;
        let slot = current.map(|c| c.index() + 1).unwrap_or(0);
        let next = if forward {
            (slot + 1) % len
        } else {
            (slot + len - 1) % len
        };
        next.checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| BudgetError::category_not_found(s))
    }
}
