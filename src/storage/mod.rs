//! Storage layer for the companies resource.
//!
//! This module provides the abstraction over where the companies document
//! lives and the repository that turns it into `Company` records.
//!
//! # Modules
//!
//! - `backend`: `CompanySource` trait for document providers
//! - `json`: file-backed source and document shape normalisation
//! - `memory`: in-memory source
//! - `repository`: `CompanyRepository`, the async fetch entry point

pub mod backend;
pub mod json;
pub mod memory;
pub mod repository;

pub use backend::CompanySource;
pub use json::{parse_companies, JsonFileSource};
pub use memory::StaticSource;
pub use repository::CompanyRepository;
