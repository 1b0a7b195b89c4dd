//! In-memory transaction store
//!
//! A single `RwLock` guards the whole map. Every mutation runs to completion
//! under the write lock, so operations on the same id are atomic with respect
//! to each other, and `list` always clones a consistent snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CoreError, CoreResult};
use crate::models::{StoreSummary, Transaction};

/// Source of fresh transaction ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Source of creation timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Owner of all transaction records
pub struct TransactionStore {
    transactions: RwLock<HashMap<String, Transaction>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Store with UUID ids and the system clock
    pub fn new() -> Self {
        Self::with_sources(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    /// Store with injected id and time sources
    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transactions: RwLock::new(HashMap::new()),
            ids,
            clock,
        }
    }

    // A panic while holding the lock cannot leave the map half-written: every
    // mutation is a single insert, remove or field assignment.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Transaction>> {
        self.transactions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Transaction>> {
        self.transactions.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all transactions, in no particular order
    pub fn list(&self) -> Vec<Transaction> {
        self.read().values().cloned().collect()
    }

    /// Get a single transaction by id
    pub fn get(&self, id: &str) -> CoreResult<Transaction> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })
    }

    /// Create a transaction with a fresh id and the current time.
    ///
    /// `amount` must already have passed validation.
    pub fn create(&self, description: impl Into<String>, amount: Decimal) -> CoreResult<Transaction> {
        let id = self.ids.next_id();
        let transaction = Transaction::new(id.clone(), description.into(), amount, self.clock.now());

        let mut transactions = self.write();
        if transactions.contains_key(&id) {
            log::error!("Generated transaction id {} already exists", id);
            return Err(CoreError::DuplicateId { id });
        }
        transactions.insert(id.clone(), transaction.clone());
        drop(transactions);

        log::debug!("Created transaction {} ({})", id, transaction.amount);
        Ok(transaction)
    }

    /// Overwrite description and amount of an existing transaction.
    ///
    /// `amount` must already have passed validation.
    pub fn update(&self, id: &str, description: impl Into<String>, amount: Decimal) -> CoreResult<Transaction> {
        let mut transactions = self.write();
        let transaction = transactions
            .get_mut(id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })?;

        transaction.description = description.into();
        transaction.amount = amount;
        let updated = transaction.clone();
        drop(transactions);

        log::debug!("Updated transaction {} ({})", id, updated.amount);
        Ok(updated)
    }

    /// Remove a transaction permanently
    pub fn delete(&self, id: &str) -> CoreResult<()> {
        match self.write().remove(id) {
            Some(_) => {
                log::debug!("Deleted transaction {}", id);
                Ok(())
            }
            None => Err(CoreError::TransactionNotFound { id: id.to_string() }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Count and total amount over one snapshot.
    ///
    /// Each amount fits in a `Decimal`, but their sum may not.
    pub fn summary(&self) -> CoreResult<StoreSummary> {
        let transactions = self.read();
        let total_transactions = transactions.len();
        let total_amount = transactions
            .values()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
            .ok_or(CoreError::AmountOverflow { count: total_transactions })?;

        Ok(StoreSummary {
            total_transactions,
            total_amount,
        })
    }
}
