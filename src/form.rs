/*
[INPUT]:  Keystrokes and field edits from the TUI
[OUTPUT]: ActivityForm state, price input guard, and record construction
[POS]:    Form state layer - transient input before submission
[UPDATE]: When form fields or validation rules change
*/

use crate::record::{ActivityRecord, Category};

pub const DEFAULT_ACCESSIBILITY: f64 = 0.5;
pub const ACCESSIBILITY_STEP: f64 = 0.1;

/// Transient form-field state. Reset to defaults after every successful
/// submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub activity: String,
    pub price: String,
    /// `None` until the user picks one of the fixed options.
    pub category: Option<Category>,
    pub booking_required: bool,
    pub accessibility: f64,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: String::new(),
            category: None,
            booking_required: false,
            accessibility: DEFAULT_ACCESSIBILITY,
        }
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the price field only if the candidate matches the price
    /// pattern. Returns whether the candidate was accepted; on rejection the
    /// previous value is kept and no error is surfaced.
    pub fn set_price(&mut self, candidate: &str) -> bool {
        if !is_valid_price_input(candidate) {
            return false;
        }
        self.price = candidate.to_string();
        true
    }

    /// Appends one typed character to the price, subject to the same guard.
    pub fn push_price_char(&mut self, ch: char) -> bool {
        let mut candidate = self.price.clone();
        candidate.push(ch);
        self.set_price(&candidate)
    }

    /// Removing a trailing character never invalidates the pattern, so no
    /// guard is needed here.
    pub fn pop_price_char(&mut self) {
        self.price.pop();
    }

    pub fn next_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let idx = category_index(current);
                Some(Category::ALL[(idx + 1).min(Category::ALL.len() - 1)])
            }
        };
    }

    pub fn prev_category(&mut self) {
        if let Some(current) = self.category {
            let idx = category_index(current);
            self.category = Some(Category::ALL[idx.saturating_sub(1)]);
        }
    }

    pub fn toggle_booking(&mut self) {
        self.booking_required = !self.booking_required;
    }

    /// Steps the accessibility value, keeping it on the 0.1 grid and inside
    /// 0.0..=1.0.
    pub fn adjust_accessibility(&mut self, delta: f64) {
        let stepped = ((self.accessibility + delta) * 10.0).round() / 10.0;
        self.accessibility = stepped.clamp(0.0, 1.0);
    }

    /// True when any of the three required fields (activity, price,
    /// category) is still empty.
    pub fn missing_required(&self) -> bool {
        self.activity.is_empty() || self.price.is_empty() || self.category.is_none()
    }

    /// Builds the record from the current field values, or `None` while a
    /// required field is missing.
    pub fn record(&self) -> Option<ActivityRecord> {
        if self.missing_required() {
            return None;
        }
        let category = self.category?;
        Some(ActivityRecord {
            activity: self.activity.clone(),
            price: self.price.clone(),
            category: category.label().to_string(),
            booking_required: self.booking_required,
            accessibility: self.accessibility,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Price input pattern: zero or more digits, an optional single decimal
/// point, and zero to two digits after it (`^\d*\.?\d{0,2}$`).
pub fn is_valid_price_input(candidate: &str) -> bool {
    let mut seen_point = false;
    let mut digits_after_point = 0;
    for ch in candidate.chars() {
        match ch {
            '.' if !seen_point => seen_point = true,
            '0'..='9' => {
                if seen_point {
                    digits_after_point += 1;
                    if digits_after_point > 2 {
                        return false;
                    }
                }
            }
            _ => return false,
        }
    }
    true
}

fn category_index(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(0)
}
