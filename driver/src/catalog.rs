use serde::{Deserialize, Deserializer, Serialize};

use kernel::interface::query::CatalogQuery;
use kernel::interface::storage::KeyValueStore;
use kernel::interface::update::CatalogModifier;
use kernel::prelude::entity::{Book, BookDraft, BookId};
use kernel::KernelError;

use crate::error::ConvertError;

pub const CATALOG_KEY: &str = "books";

/// Stores the whole catalog as one JSON array under [`CATALOG_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCatalogRepository;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookRow {
    id: String,
    #[serde(default, deserialize_with = "text")]
    title: String,
    #[serde(default, deserialize_with = "text")]
    subtitle: String,
    #[serde(default, deserialize_with = "text")]
    author: String,
    #[serde(default, deserialize_with = "text")]
    publisher: String,
    #[serde(default, deserialize_with = "text")]
    publication_year: String,
    #[serde(default, deserialize_with = "text")]
    language: String,
    #[serde(default, deserialize_with = "text")]
    pages: String,
    #[serde(default, deserialize_with = "text")]
    price: String,
    #[serde(default, deserialize_with = "text")]
    cover_image: String,
    #[serde(default, deserialize_with = "text")]
    url: String,
    #[serde(default, deserialize_with = "text")]
    isbn: String,
}

// Older snapshots may carry `null` for fields that were never filled in.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        let BookDraft {
            title,
            subtitle,
            author,
            publisher,
            publication_year,
            language,
            pages,
            price,
            cover_image,
            url,
            isbn,
        } = BookDraft::from(book);
        Self {
            id: book.id().as_str().to_string(),
            title,
            subtitle,
            author,
            publisher,
            publication_year,
            language,
            pages,
            price,
            cover_image,
            url,
            isbn,
        }
    }
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        let draft = BookDraft {
            title: row.title,
            subtitle: row.subtitle,
            author: row.author,
            publisher: row.publisher,
            publication_year: row.publication_year,
            language: row.language,
            pages: row.pages,
            price: row.price,
            cover_image: row.cover_image,
            url: row.url,
            isbn: row.isbn,
        };
        Book::new(BookId::new(row.id), draft)
    }
}

#[async_trait::async_trait]
impl<Store: KeyValueStore> CatalogQuery<Store> for JsonCatalogRepository {
    async fn load(&self, store: &Store) -> error_stack::Result<Option<Vec<Book>>, KernelError> {
        let Some(raw) = store.get(CATALOG_KEY).await? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }
        let rows = serde_json::from_str::<Vec<BookRow>>(&raw)
            .convert_error()
            .map_err(|report| report.attach_printable("catalog snapshot is not a book array"))?;
        Ok(Some(rows.into_iter().map(Book::from).collect()))
    }
}

#[async_trait::async_trait]
impl<Store: KeyValueStore> CatalogModifier<Store> for JsonCatalogRepository {
    async fn save(&self, store: &Store, books: &[Book]) -> error_stack::Result<(), KernelError> {
        let rows = books.iter().map(BookRow::from).collect::<Vec<_>>();
        let raw = serde_json::to_string(&rows).convert_error()?;
        store.set(CATALOG_KEY, raw).await
    }
}
