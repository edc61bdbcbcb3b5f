//! # Kontak Common Library
//!
//! Shared code for the Kontak directory service:
//! - Error types
//! - Bootstrap configuration loading
//! - Database initialization and schema

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
