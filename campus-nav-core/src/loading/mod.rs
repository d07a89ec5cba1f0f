//! This module is responsible for loading the campus dataset, either the
//! compiled-in table or a JSON file, and building a validated `Campus`.

mod builder;
mod builtin;
mod config;
pub mod dataset;

pub use builder::create_campus_model;
pub use builtin::{CAMPUS_CENTER, CAMPUS_NAME, DEFAULT_ZOOM, builtin_campus};
pub use config::CampusModelConfig;
pub use dataset::{DatasetFile, read_dataset};
