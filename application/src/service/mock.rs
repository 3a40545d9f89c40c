use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use error_stack::Report;
use time::macros::datetime;
use time::{Date, OffsetDateTime};

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::query::{
    BookSeedQuery, CatalogQuery, DependOnBookSeedQuery, DependOnCatalogQuery,
    DependOnSimilarBookQuery, SimilarBookQuery,
};
use kernel::interface::storage::{DependOnKeyValueStore, KeyValueStore};
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::{Book, SeedBook, SimilarBook, SimilarQuery};
use kernel::KernelError;

#[derive(Default)]
pub struct MemoryStore(Mutex<HashMap<String, String>>);

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> error_stack::Result<Option<String>, KernelError> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> error_stack::Result<(), KernelError> {
        self.0.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryRepository {
    snapshot: Mutex<Option<Vec<Book>>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

#[async_trait::async_trait]
impl CatalogQuery<MemoryStore> for MemoryRepository {
    async fn load(&self, _: &MemoryStore) -> error_stack::Result<Option<Vec<Book>>, KernelError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Report::new(KernelError::Internal).attach_printable("corrupt snapshot"));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}

#[async_trait::async_trait]
impl CatalogModifier<MemoryStore> for MemoryRepository {
    async fn save(&self, _: &MemoryStore, books: &[Book]) -> error_stack::Result<(), KernelError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Report::new(KernelError::Internal).attach_printable("disk full"));
        }
        *self.snapshot.lock().unwrap() = Some(books.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FixedClock(OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[derive(Default)]
pub struct StaticSeed(Mutex<Vec<SeedBook>>);

#[async_trait::async_trait]
impl BookSeedQuery for StaticSeed {
    async fn fetch_all(&self) -> error_stack::Result<Vec<SeedBook>, KernelError> {
        Ok(self.0.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct CannedSearch(Mutex<HashMap<String, Vec<SimilarBook>>>);

#[async_trait::async_trait]
impl SimilarBookQuery for CannedSearch {
    async fn search(
        &self,
        query: &SimilarQuery,
    ) -> error_stack::Result<Vec<SimilarBook>, KernelError> {
        self.0
            .lock()
            .unwrap()
            .get(query.as_str())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::Network).attach_printable("no canned answer"))
    }
}

pub struct MockModule {
    store: MemoryStore,
    repository: MemoryRepository,
    clock: FixedClock,
    seed: StaticSeed,
    search: CannedSearch,
}

impl Default for MockModule {
    fn default() -> Self {
        Self {
            store: MemoryStore::default(),
            repository: MemoryRepository::default(),
            clock: FixedClock(datetime!(2024-01-10 09:30:00.250 UTC)),
            seed: StaticSeed::default(),
            search: CannedSearch::default(),
        }
    }
}

impl MockModule {
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    pub fn snapshot(&self) -> Option<Vec<Book>> {
        self.repository.snapshot.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.repository.writes.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.repository.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.repository.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn seed_with(&self, books: Vec<SeedBook>) {
        *self.seed.0.lock().unwrap() = books;
    }

    pub fn answer(&self, query: &str, books: Vec<SimilarBook>) {
        self.search.0.lock().unwrap().insert(query.to_string(), books);
    }
}

impl DependOnKeyValueStore for MockModule {
    type KeyValueStore = MemoryStore;
    fn key_value_store(&self) -> &Self::KeyValueStore {
        &self.store
    }
}

impl DependOnCatalogQuery for MockModule {
    type CatalogQuery = MemoryRepository;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &self.repository
    }
}

impl DependOnCatalogModifier for MockModule {
    type CatalogModifier = MemoryRepository;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &self.repository
    }
}

impl DependOnClock for MockModule {
    type Clock = FixedClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnBookSeedQuery for MockModule {
    type BookSeedQuery = StaticSeed;
    fn book_seed_query(&self) -> &Self::BookSeedQuery {
        &self.seed
    }
}

impl DependOnSimilarBookQuery for MockModule {
    type SimilarBookQuery = CannedSearch;
    fn similar_book_query(&self) -> &Self::SimilarBookQuery {
        &self.search
    }
}
