use std::collections::HashSet;

use kernel::interface::event::{Applier, BookEvent};
use kernel::interface::query::{BookSeedQuery, DependOnBookSeedQuery};
use kernel::KernelError;

use crate::service::SaveCatalogService;
use crate::Session;

#[async_trait::async_trait]
pub trait ImportSeedService: 'static + Sync + Send + SaveCatalogService + DependOnBookSeedQuery {
    async fn import_seed(&self, session: &mut Session) -> error_stack::Result<usize, KernelError> {
        let seeds = self.book_seed_query().fetch_all().await?;
        let mut seen = HashSet::new();
        let books = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| seed.into_book(index))
            .filter(|book| !session.catalog().contains(book.id()) && seen.insert(book.id().clone()))
            .collect::<Vec<_>>();

        let imported = books.len();
        if imported == 0 {
            tracing::debug!("seed contained no new books");
            return Ok(0);
        }
        session.catalog_mut().apply(BookEvent::Import { books });
        tracing::info!(imported, "seed imported");

        self.save_catalog(session.catalog()).await?;
        Ok(imported)
    }
}

impl<T> ImportSeedService for T where T: SaveCatalogService + DependOnBookSeedQuery {}
