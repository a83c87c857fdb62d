//! Expense models
//!
//! `DraftExpense` is the editable, possibly incomplete form record.
//! `NewExpense` is a validated draft that has not been given an identifier
//! yet, and `Expense` is the committed record held by the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ValidationError;

/// A committed expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl Expense {
    /// Replace every field except the identifier
    pub fn apply(&mut self, details: NewExpense) {
        self.name = details.name;
        self.amount = details.amount;
        self.category = details.category;
        self.date = details.date;
    }

    /// The expense's fields without its identifier
    pub fn details(&self) -> NewExpense {
        NewExpense {
            name: self.name.clone(),
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.category,
            self.amount
        )
    }
}

/// A complete expense awaiting an identifier from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Attach an identifier, producing a committed expense
    pub fn commit(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            name: self.name,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// The record behind the expense form
///
/// Fields are optional where the form can leave them unset; the
/// completeness check turns a draft into a [`NewExpense`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftExpense {
    pub name: String,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl DraftExpense {
    /// The empty initial shape: no name, zero amount, no category, today's date
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            amount: Some(Money::zero()),
            category: None,
            date: Some(today),
        }
    }

    /// Copy a committed expense's fields into a draft
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: Some(expense.amount),
            category: Some(expense.category),
            date: Some(expense.date),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_ok()
    }

    /// Validate that every field is filled in
    pub fn complete(&self) -> Result<NewExpense, ValidationError> {
        let name = self.name.trim();
        match (self.amount, self.category, self.date) {
            (Some(amount), Some(category), Some(date)) if !name.is_empty() => Ok(NewExpense {
                name: name.to_string(),
                amount,
                category,
                date,
            }),
            _ => Err(ValidationError::Incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn coffee_draft() -> DraftExpense {
        DraftExpense {
            name: "Coffee".into(),
            amount: Some(Money::from_units(5)),
            category: Some(Category::Food),
            date: Some(date(2024, 1, 1)),
        }
    }

    #[test]
    fn test_new_draft_shape() {
        let today = date(2024, 3, 15);
        let draft = DraftExpense::new(today);
        assert_eq!(draft.name, "");
        assert_eq!(draft.amount, Some(Money::zero()));
        assert_eq!(draft.category, None);
        assert_eq!(draft.date, Some(today));
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_complete_draft() {
        let new = coffee_draft().complete().unwrap();
        assert_eq!(new.name, "Coffee");
        assert_eq!(new.amount, Money::from_units(5));
        assert_eq!(new.category, Category::Food);
    }

    #[test]
    fn test_zero_amount_is_complete() {
        let mut draft = coffee_draft();
        draft.amount = Some(Money::zero());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_each_missing_field_is_incomplete() {
        let mut blank_name = coffee_draft();
        blank_name.name = "   ".into();
        let mut no_amount = coffee_draft();
        no_amount.amount = None;
        let mut no_category = coffee_draft();
        no_category.category = None;
        let mut no_date = coffee_draft();
        no_date.date = None;

        for draft in [blank_name, no_amount, no_category, no_date] {
            assert_eq!(draft.complete(), Err(ValidationError::Incomplete));
        }
    }

    #[test]
    fn test_name_is_trimmed_on_completion() {
        let mut draft = coffee_draft();
        draft.name = "  Coffee  ".into();
        assert_eq!(draft.complete().unwrap().name, "Coffee");
    }

    #[test]
    fn test_draft_round_trips_through_expense() {
        let id = ExpenseId::new();
        let expense = coffee_draft().complete().unwrap().commit(id);
        assert_eq!(expense.id, id);
        assert_eq!(DraftExpense::from_expense(&expense), coffee_draft());
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let id = ExpenseId::new();
        let mut expense = coffee_draft().complete().unwrap().commit(id);
        let mut details = expense.details();
        details.amount = Money::from_units(7);
        expense.apply(details);
        assert_eq!(expense.id, id);
        assert_eq!(expense.amount, Money::from_units(7));
    }
}
