//! Core functionality for docs scanning, documents, and configuration

pub mod config;
pub mod document;
pub mod error;
pub mod file_system;
