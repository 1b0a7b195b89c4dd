//! Route modules for the API server
//!
//! - transactions: Transaction CRUD
//! - settings: Effective configuration
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints

pub mod transactions;
pub mod settings;
