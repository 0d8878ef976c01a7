//! Presentation of the puppy list: an editable table plus a creation form
//!
//! The board owns only form state (the create draft, the row being edited and
//! its draft). Records and the error message live in the [`PuppyCache`] that
//! every action receives, so rendering and network calls stay separate.

use crate::client::api::PuppyApi;
use crate::client::cache::PuppyCache;
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};
use rust_decimal::Decimal;
use std::fmt::Write;

pub const NAME_REQUIRED: &str = "Name is required";

const HEADERS: [&str; 6] = ["ID", "Name", "Breed", "Weight (lbs)", "Vaccinated", "Actions"];

/// Text fields of the create form or of the row being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PuppyDraft {
    pub name: String,
    pub breed: String,
    pub weight_lbs: String,
    pub vaccinated: bool,
}

impl PuppyDraft {
    pub fn from_puppy(puppy: &Puppy) -> Self {
        Self {
            name: puppy.name.clone(),
            breed: puppy.breed.clone().unwrap_or_default(),
            weight_lbs: puppy
                .weight_lbs
                .map(|w| w.to_string())
                .unwrap_or_default(),
            vaccinated: puppy.vaccinated,
        }
    }

    fn trimmed_name(&self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() {
            Err(NAME_REQUIRED.to_string())
        } else {
            Ok(name.to_string())
        }
    }

    fn breed(&self) -> Option<String> {
        (!self.breed.is_empty()).then(|| self.breed.clone())
    }

    /// Blank means no weight; anything else must parse as a number.
    fn weight(&self) -> Result<Option<Decimal>, String> {
        let raw = self.weight_lbs.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<Decimal>()
            .map(Some)
            .map_err(|_| format!("Weight must be a number (got '{}')", raw))
    }

    pub fn to_new_puppy(&self) -> Result<NewPuppy, String> {
        Ok(NewPuppy {
            name: self.trimmed_name()?,
            breed: self.breed(),
            weight_lbs: self.weight()?,
            arrival_date: None,
            vaccinated: Some(self.vaccinated),
        })
    }

    /// Every editable column is sent, so the update rewrites the whole row.
    pub fn to_changes(&self) -> Result<PuppyChanges, String> {
        Ok(PuppyChanges {
            name: Some(self.trimmed_name()?),
            breed: Some(self.breed()),
            weight_lbs: Some(self.weight()?),
            arrival_date: None,
            vaccinated: Some(self.vaccinated),
        })
    }
}

/// Table + form view over a [`PuppyCache`]
#[derive(Debug, Clone, Default)]
pub struct PuppyBoard {
    /// Always-visible creation form
    pub form: PuppyDraft,
    /// Draft of the row being edited
    pub edit_row: PuppyDraft,
    editing_id: Option<i32>,
}

impl PuppyBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<i32> {
        self.editing_id
    }

    /// Put one row into edit mode, replacing any row already being edited.
    pub fn start_edit(&mut self, puppy: &Puppy) {
        self.editing_id = Some(puppy.id);
        self.edit_row = PuppyDraft::from_puppy(puppy);
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_row = PuppyDraft::default();
    }

    /// Submit the creation form; the form resets only when the server accepts it.
    pub async fn add<A>(&mut self, cache: &mut PuppyCache, api: &A) -> Option<Puppy>
    where
        A: PuppyApi + ?Sized,
    {
        let payload = match self.form.to_new_puppy() {
            Ok(payload) => payload,
            Err(message) => {
                cache.fail(message);
                return None;
            }
        };

        let created = cache.add(api, &payload).await?;
        self.form = PuppyDraft::default();
        Some(created)
    }

    /// Submit the edit row; leaves edit mode when the server accepts it.
    pub async fn save_edit<A>(&mut self, cache: &mut PuppyCache, api: &A) -> Option<Puppy>
    where
        A: PuppyApi + ?Sized,
    {
        let id = self.editing_id?;
        let changes = match self.edit_row.to_changes() {
            Ok(changes) => changes,
            Err(message) => {
                cache.fail(message);
                return None;
            }
        };

        let updated = cache.update(api, id, &changes).await?;
        self.cancel_edit();
        Some(updated)
    }

    /// Delete a row; deleting the row being edited also leaves edit mode.
    pub async fn remove<A>(&mut self, cache: &mut PuppyCache, api: &A, id: i32) -> bool
    where
        A: PuppyApi + ?Sized,
    {
        let removed = cache.remove(api, id).await;
        if removed && self.editing_id == Some(id) {
            self.cancel_edit();
        }
        removed
    }

    /// Render the board as plain text.
    pub fn render(&self, cache: &PuppyCache) -> String {
        if cache.is_loading() {
            return "Loading...\n".to_string();
        }

        let mut out = String::new();
        if let Some(error) = cache.error() {
            let _ = writeln!(out, "{}", error);
            out.push('\n');
        }

        out.push_str("Puppies\n");
        out.push_str(&self.render_table(cache.puppies()));

        out.push_str("\nAdd Puppy\n");
        let _ = writeln!(out, "  Name (required): {}", self.form.name);
        let _ = writeln!(out, "  Breed:           {}", self.form.breed);
        let _ = writeln!(out, "  Weight (lbs):    {}", self.form.weight_lbs);
        let _ = writeln!(out, "  [{}] Vaccinated", if self.form.vaccinated { "x" } else { " " });

        out
    }

    fn render_table(&self, puppies: &[Puppy]) -> String {
        let rows: Vec<[String; 6]> = puppies.iter().map(|p| self.row_cells(p)).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header = HEADERS.map(str::to_string);
        push_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("-+-"));

        if rows.is_empty() {
            out.push_str("No puppies yet.\n");
        }
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        out
    }

    fn row_cells(&self, puppy: &Puppy) -> [String; 6] {
        if self.editing_id == Some(puppy.id) {
            let draft = &self.edit_row;
            return [
                puppy.id.to_string(),
                format!("[{}]", draft.name),
                format!("[{}]", draft.breed),
                format!("[{}]", draft.weight_lbs),
                format!("[{}]", if draft.vaccinated { "x" } else { " " }),
                "Save | Cancel".to_string(),
            ];
        }

        [
            puppy.id.to_string(),
            puppy.name.clone(),
            puppy.breed.clone().unwrap_or_default(),
            puppy.weight_lbs.map(|w| w.to_string()).unwrap_or_default(),
            if puppy.vaccinated { "Yes" } else { "No" }.to_string(),
            "Edit | Delete".to_string(),
        ]
    }
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}
