use crate::entity::SeedBook;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookSeedQuery: Sync + Send + 'static {
    async fn fetch_all(&self) -> error_stack::Result<Vec<SeedBook>, KernelError>;
}

pub trait DependOnBookSeedQuery: Sync + Send + 'static {
    type BookSeedQuery: BookSeedQuery;
    fn book_seed_query(&self) -> &Self::BookSeedQuery;
}
