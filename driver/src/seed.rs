use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

use kernel::interface::query::BookSeedQuery;
use kernel::prelude::entity::SeedBook;
use kernel::KernelError;

use crate::env_or;
use crate::error::ConvertError;

const SEED_PATH: &str = "BOOKSHELF_SEED_PATH";
const DEFAULT_SEED_PATH: &str = "./books.json";

/// Static catalog seed: a JSON array shaped like the search API's book list.
pub struct JsonSeedFile {
    path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedRow {
    isbn13: String,
    title: String,
    subtitle: String,
    image: String,
    price: String,
    url: String,
}

impl From<SeedRow> for SeedBook {
    fn from(row: SeedRow) -> Self {
        SeedBook::new(row.isbn13, row.title, row.subtitle, row.image, row.price, row.url)
    }
}

impl JsonSeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self::new(env_or(SEED_PATH, DEFAULT_SEED_PATH)?))
    }
}

#[async_trait::async_trait]
impl BookSeedQuery for JsonSeedFile {
    async fn fetch_all(&self) -> error_stack::Result<Vec<SeedBook>, KernelError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::warn!("seed file {} not found", self.path.display());
                return Ok(Vec::new());
            }
            Err(error) => return Err(error).convert_error(),
        };
        let rows = serde_json::from_str::<Vec<SeedRow>>(&raw)
            .convert_error()
            .map_err(|report| {
                report.attach_printable(format!("{} is not a book array", self.path.display()))
            })?;
        Ok(rows.into_iter().map(SeedBook::from).collect())
    }
}
