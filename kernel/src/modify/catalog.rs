use crate::entity::Book;
use crate::storage::{DependOnKeyValueStore, KeyValueStore};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogModifier<Store: KeyValueStore>: 'static + Sync + Send {
    async fn save(&self, store: &Store, books: &[Book]) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCatalogModifier: 'static + Sync + Send + DependOnKeyValueStore {
    type CatalogModifier: CatalogModifier<Self::KeyValueStore>;
    fn catalog_modifier(&self) -> &Self::CatalogModifier;
}
