use kernel::interface::query::{DependOnSimilarBookQuery, SimilarBookQuery};
use kernel::prelude::entity::SimilarBook;
use kernel::KernelError;

use crate::LookupTicket;

#[async_trait::async_trait]
pub trait SimilarBooksService: 'static + Sync + Send + DependOnSimilarBookQuery {
    async fn search_similar(
        &self,
        ticket: &LookupTicket,
    ) -> error_stack::Result<Vec<SimilarBook>, KernelError> {
        tracing::debug!(query = ticket.query().as_str(), "searching similar books");
        self.similar_book_query().search(ticket.query()).await
    }
}

impl<T> SimilarBooksService for T where T: DependOnSimilarBookQuery {}
