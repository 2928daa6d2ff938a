//! studyhub-core — catalog pipeline, assessment engine, and state store.
//!
//! This crate holds every piece of studyhub with actual decision logic:
//! the filter/sort pipeline and enrollment overlay, the featured rotator,
//! the quiz and flashcard sessions, and the recommendation resolver. All
//! I/O goes through the [`api::CatalogApi`] trait.

pub mod api;
pub mod catalog;
pub mod display;
pub mod error;
pub mod flashcards;
pub mod model;
pub mod quiz;
pub mod recommend;
pub mod rotator;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;
