//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presenter/FFI layers decoupled from storage details.

pub mod category_service;
pub mod item_service;
