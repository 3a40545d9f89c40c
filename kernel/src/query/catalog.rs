use crate::entity::Book;
use crate::storage::{DependOnKeyValueStore, KeyValueStore};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogQuery<Store: KeyValueStore>: Sync + Send + 'static {
    /// Reads the persisted snapshot. `None` when nothing was stored yet.
    async fn load(&self, store: &Store) -> error_stack::Result<Option<Vec<Book>>, KernelError>;
}

pub trait DependOnCatalogQuery: Sync + Send + 'static + DependOnKeyValueStore {
    type CatalogQuery: CatalogQuery<Self::KeyValueStore>;
    fn catalog_query(&self) -> &Self::CatalogQuery;
}
