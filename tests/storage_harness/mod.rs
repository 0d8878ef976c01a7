//! Shared test harness for puppy store testing
//!
//! Provides payload builders plus the `puppy_service_tests!` and
//! `rest_integration_tests!` macros, so every `PuppyService` backend is held
//! to the same contract.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]


#[macro_use]
pub mod integration;

use chrono::{DateTime, TimeZone, Utc};
use puppy::core::puppy::{NewPuppy, PuppyChanges};
use rust_decimal::Decimal;

/// A create payload with every optional column filled in.
pub fn full_puppy(name: &str, breed: &str, weight_cents: i64, vaccinated: bool) -> NewPuppy {
    NewPuppy {
        name: name.to_string(),
        breed: Some(breed.to_string()),
        weight_lbs: Some(Decimal::new(weight_cents, 2)),
        arrival_date: Some(fixed_arrival()),
        vaccinated: Some(vaccinated),
    }
}

/// A create payload carrying only the required name.
pub fn named_puppy(name: &str) -> NewPuppy {
    NewPuppy::named(name)
}

/// An update that touches only the weight.
pub fn weight_change(weight_cents: i64) -> PuppyChanges {
    PuppyChanges {
        weight_lbs: Some(Some(Decimal::new(weight_cents, 2))),
        ..PuppyChanges::default()
    }
}

/// A whole-second timestamp so stores with microsecond precision compare equal.
pub fn fixed_arrival() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
}

/// A name one character over the column limit.
pub fn overlong_name() -> String {
    "x".repeat(puppy::core::puppy::TEXT_COLUMN_MAX + 1)
}
