//! Flutter bridge over `pelo_core`.

pub mod api;
