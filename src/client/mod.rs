//! Client side of the puppy API: HTTP access, the state store and its view

pub mod api;
pub mod board;
pub mod cache;

pub use api::{ClientError, HttpPuppyApi, PuppyApi};
pub use board::{PuppyBoard, PuppyDraft};
pub use cache::PuppyCache;
