//! Core use-case services.
//!
//! # Responsibility
//! - Own in-memory state and orchestrate persistence through repositories.
//! - Keep FFI/presentation layers decoupled from storage details.

pub mod reminders_store;
pub mod settings_service;
