use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookQuery, DependOnBookRequestQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnBookRequestModifier};
use kernel::prelude::entity::{Book, BookRequest};
use kernel::KernelError;

pub use self::{book::*, request::*};

mod book;
mod request;

#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    books: BTreeMap<i64, Book>,
    requests: BTreeMap<i64, BookRequest>,
}

impl LedgerStore {
    pub(in crate::database) fn books(&self) -> &BTreeMap<i64, Book> {
        &self.books
    }

    pub(in crate::database) fn books_mut(&mut self) -> &mut BTreeMap<i64, Book> {
        &mut self.books
    }

    pub(in crate::database) fn requests(&self) -> &BTreeMap<i64, BookRequest> {
        &self.requests
    }

    pub(in crate::database) fn requests_mut(&mut self) -> &mut BTreeMap<i64, BookRequest> {
        &mut self.requests
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    ledger: Arc<RwLock<LedgerStore>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let published = Arc::clone(&self.ledger).write_owned().await;
        let staged = (*published).clone();
        Ok(MemoryTransaction { staged, published })
    }
}

// Writes land on a staged working copy and become visible only on commit.
// The guard is held for the whole transaction, so ledger mutations are
// serialized and a dropped transaction leaves the published state untouched.
pub struct MemoryTransaction {
    staged: LedgerStore,
    published: OwnedRwLockWriteGuard<LedgerStore>,
}

impl MemoryTransaction {
    pub(in crate::database) fn store(&self) -> &LedgerStore {
        &self.staged
    }

    pub(in crate::database) fn store_mut(&mut self) -> &mut LedgerStore {
        &mut self.staged
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        *self.published = self.staged;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl DependOnBookQuery<MemoryTransaction> for MemoryDatabase {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier<MemoryTransaction> for MemoryDatabase {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}

impl DependOnBookRequestQuery<MemoryTransaction> for MemoryDatabase {
    type BookRequestQuery = MemoryBookRequestRepository;
    fn book_request_query(&self) -> &Self::BookRequestQuery {
        &MemoryBookRequestRepository
    }
}

impl DependOnBookRequestModifier<MemoryTransaction> for MemoryDatabase {
    type BookRequestModifier = MemoryBookRequestRepository;
    fn book_request_modifier(&self) -> &Self::BookRequestModifier {
        &MemoryBookRequestRepository
    }
}
