//! The puppy record and the payloads that create and change it

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::PuppyError;
use crate::core::validation::{
    FieldChecks, decimal_range, optional_text, required_text, round_to_scale,
};

/// Maximum length of the `name` and `breed` columns (`VARCHAR(100)`).
pub const TEXT_COLUMN_MAX: usize = 100;

/// Decimal places kept by the `weight_lbs` column (`NUMERIC(5,2)`).
pub const WEIGHT_SCALE: u32 = 2;

/// Exclusive magnitude bound of the `weight_lbs` column (`NUMERIC(5,2)`).
pub const WEIGHT_LIMIT: Decimal = Decimal::ONE_THOUSAND;

/// One row of the `puppies` table.
///
/// Optional columns serialize as `null` rather than being omitted, so clients
/// always see the full record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Puppy {
    pub id: i32,
    pub name: String,
    pub breed: Option<String>,
    pub weight_lbs: Option<Decimal>,
    pub arrival_date: Option<DateTime<Utc>>,
    pub vaccinated: bool,
}

/// Body of `POST /puppies`.
///
/// Only `name` is required. `vaccinated` defaults to `false` and
/// `arrival_date` to the creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPuppy {
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub weight_lbs: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
}

impl NewPuppy {
    /// A payload carrying only the required name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn check(&self) -> Result<(), PuppyError> {
        FieldChecks::new()
            .check(required_text(TEXT_COLUMN_MAX)("name", &self.name))
            .check(optional_text(TEXT_COLUMN_MAX)("breed", self.breed.as_deref()))
            .check(decimal_range(WEIGHT_LIMIT, WEIGHT_SCALE)(
                "weight_lbs",
                self.weight_lbs.as_ref(),
            ))
            .finish()
    }

    /// Materialize the record a store would hold, applying column defaults.
    pub fn into_puppy(self, id: i32, now: DateTime<Utc>) -> Puppy {
        Puppy {
            id,
            name: self.name,
            breed: self.breed,
            weight_lbs: self.weight_lbs.map(|w| round_to_scale(w, WEIGHT_SCALE)),
            arrival_date: Some(self.arrival_date.unwrap_or(now)),
            vaccinated: self.vaccinated.unwrap_or(false),
        }
    }
}

/// Body of `PUT /puppies/{id}`: a partial merge onto the stored record.
///
/// An absent field leaves the column unchanged. For nullable columns an
/// explicit `null` clears the value, hence the nested `Option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PuppyChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub breed: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight_lbs: Option<Option<Decimal>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub arrival_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
}

impl PuppyChanges {
    pub fn check(&self) -> Result<(), PuppyError> {
        let mut checks = FieldChecks::new();
        if let Some(name) = &self.name {
            checks.check(required_text(TEXT_COLUMN_MAX)("name", name));
        }
        checks
            .check(optional_text(TEXT_COLUMN_MAX)(
                "breed",
                self.breed.as_ref().and_then(|b| b.as_deref()),
            ))
            .check(decimal_range(WEIGHT_LIMIT, WEIGHT_SCALE)(
                "weight_lbs",
                self.weight_lbs.as_ref().and_then(|w| w.as_ref()),
            ))
            .finish()
    }

    /// Merge the supplied fields onto `puppy`; `id` is never touched.
    pub fn apply_to(self, puppy: &mut Puppy) {
        if let Some(name) = self.name {
            puppy.name = name;
        }
        if let Some(breed) = self.breed {
            puppy.breed = breed;
        }
        if let Some(weight) = self.weight_lbs {
            puppy.weight_lbs = weight.map(|w| round_to_scale(w, WEIGHT_SCALE));
        }
        if let Some(arrival_date) = self.arrival_date {
            puppy.arrival_date = arrival_date;
        }
        if let Some(vaccinated) = self.vaccinated {
            puppy.vaccinated = vaccinated;
        }
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
