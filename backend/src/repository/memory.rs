use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::models::Transaction;

use super::TransactionRepository;

/// Process-local store with serial id semantics. Ids start at 1 and are
/// never reused, and `find_all` returns rows in id order.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Transaction>,
    last_id: i32,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn find_all(&self) -> Result<Vec<Transaction>, sqlx::Error> {
        Ok(self.inner.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, sqlx::Error> {
        Ok(self.inner.lock().rows.get(&id).cloned())
    }

    async fn add(&self, txn: &mut Transaction) -> Result<(), sqlx::Error> {
        let mut inner = self.inner.lock();
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| sqlx::Error::Protocol("transaction id sequence exhausted".into()))?;
        inner.last_id = id;
        txn.id = id;
        inner.rows.insert(txn.id, txn.clone());
        Ok(())
    }

    async fn edit(&self, txn: &Transaction) -> Result<(), sqlx::Error> {
        if let Some(row) = self.inner.lock().rows.get_mut(&txn.id) {
            *row = txn.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        self.inner.lock().rows.remove(&id);
        Ok(())
    }
}
