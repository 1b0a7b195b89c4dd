//! Request parameter binding for create/update
//!
//! `description` and `amount` may arrive in the query string or in an
//! `application/x-www-form-urlencoded` body. Query values win on conflict.

use std::collections::HashMap;
use txledger_core::{CoreError, CoreResult, Decimal};

/// Parameters shared by POST /transactions and PUT /transactions/:id
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionParams {
    pub description: String,
    /// `None` when absent; the validator decides what that means
    pub amount: Option<Decimal>,
}

impl TransactionParams {
    /// Bind from query params, falling back to the form body
    pub fn bind(query: HashMap<String, String>, body: &str) -> CoreResult<Self> {
        let mut params = parse_form_body(body);
        params.extend(query);

        let description = params
            .remove("description")
            .ok_or_else(|| CoreError::invalid_input("description is required"))?;

        let amount = match params.get("amount").map(|s| s.trim()) {
            None | Some("") => None,
            // Exact parse: digits past the 28th decimal place are refused, not rounded
            Some(raw) => Some(Decimal::from_str_exact(raw).map_err(|_| {
                CoreError::invalid_input(format!("amount is not a valid decimal: {}", raw))
            })?),
        };

        Ok(Self { description, amount })
    }
}

/// Decode a urlencoded form body into key/value pairs
pub fn parse_form_body(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode_component(key), decode_component(value));
    }
    params
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}
