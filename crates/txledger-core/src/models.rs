//! Core data models for the ledger

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial transaction record
///
/// Instances are only constructed and mutated by the store; everything handed
/// out to callers is a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Free-text label
    pub description: String,
    /// Always strictly positive; serialized as a decimal string
    pub amount: Decimal,
    /// Creation time, never changes
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(id: String, description: String, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            amount,
            timestamp,
        }
    }
}

/// Aggregate view over the store contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub total_transactions: usize,
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_transaction_json_shape() {
        let tx = Transaction::new(
            "tx-1".to_string(),
            "Coffee".to_string(),
            Decimal::from_str("4.50").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        );

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["id"], "tx-1");
        assert_eq!(value["description"], "Coffee");
        assert_eq!(value["amount"], "4.50");
        assert_eq!(value["timestamp"], "2024-06-15T10:30:00Z");
    }

    #[test]
    fn test_transaction_accepts_numeric_amount() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":"a","description":"Tea","amount":5.25,"timestamp":"2024-06-15T10:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(tx.amount, Decimal::from_str("5.25").unwrap());
    }
}
