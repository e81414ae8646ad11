//! Browser front-end for a personal expense tracker.
//!
//! The app talks to a remote REST service through [`api::ExpenseApi`],
//! aggregates what it fetches with the pure functions in [`aggregation`],
//! and keeps per-page fetch state in the holders of [`state`].

pub mod aggregation;
pub mod api;
pub mod app;
pub mod category;
pub mod components;
pub mod config;
pub mod errors;
pub mod format;
pub mod logging;
pub mod model;
pub mod pages;
pub mod state;

pub use app::App;
