//! Transaction routes - CRUD over the in-memory store
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - params.rs: query/form parameter binding

pub mod api;
pub mod params;

pub use api::{
    api_transactions,
    api_transaction_detail,
    api_transaction_create,
    api_transaction_update,
    api_transaction_delete,
};
