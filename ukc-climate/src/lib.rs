//! Core types and API client for UK monthly climate records.
//!
//! This crate provides:
//! - the fixed vocabularies (`Dataset`, `Region`, `Month`, `Year`)
//! - `ClimateRecord` and the paginated list envelope returned by the API
//! - `Selection`, the year/region/datasets state a dashboard owns
//! - `chart`: grouping and month pivot of records into chart rows
//! - `sync`: one fetch per selection change, newest response wins
//! - `client` (feature `api`): the `reqwest` client for the climate endpoint

pub mod chart;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod month;
pub mod query;
pub mod record;
pub mod region;
pub mod selection;
pub mod sequencer;
pub mod sync;
pub mod year;

pub use error::{ClimateError, Result};
