/*
[INPUT]:  User-entered activity data
[OUTPUT]: ActivityRecord wire type and the fixed Category set
[POS]:    Data model layer - persisted entity
[UPDATE]: When changing the persisted record shape (none planned; the file
          format is shared with existing data)
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// One activity entry as it is persisted.
///
/// Field names on the wire are `activity`, `price`, `selected`, `isChecked`
/// and `value`. Existing data files use these names, so the renames must not
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity: String,
    /// Price as entered, already restricted to at most two decimal places.
    pub price: String,
    /// Category label. Always one of [`Category::ALL`] at creation time;
    /// loaded data is trusted as-is.
    #[serde(rename = "selected")]
    pub category: String,
    #[serde(rename = "isChecked")]
    pub booking_required: bool,
    /// Accessibility value in 0.0..=1.0, step 0.1.
    #[serde(rename = "value")]
    pub accessibility: f64,
}

/// The fixed set of activity categories offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Education,
        Category::Recreational,
        Category::Social,
        Category::Diy,
        Category::Charity,
        Category::Cooking,
        Category::Relaxation,
        Category::Music,
        Category::Busywork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Recreational => "Recreational",
            Category::Social => "Social",
            Category::Diy => "DIY",
            Category::Charity => "Charity",
            Category::Cooking => "Cooking",
            Category::Relaxation => "Relaxation",
            Category::Music => "Music",
            Category::Busywork => "Busywork",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
