use crate::entity::{SimilarBook, SimilarQuery};
use crate::KernelError;

#[async_trait::async_trait]
pub trait SimilarBookQuery: Sync + Send + 'static {
    async fn search(
        &self,
        query: &SimilarQuery,
    ) -> error_stack::Result<Vec<SimilarBook>, KernelError>;
}

pub trait DependOnSimilarBookQuery: Sync + Send + 'static {
    type SimilarBookQuery: SimilarBookQuery;
    fn similar_book_query(&self) -> &Self::SimilarBookQuery;
}
