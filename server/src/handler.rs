use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::Mutex;
use vodca::References;

use application::service::LoadCatalogService;
use application::Session;
use driver::catalog::JsonCatalogRepository;
use driver::clock::SystemClock;
use driver::search::ItBookClient;
use driver::seed::JsonSeedFile;
use driver::storage::LocalStorage;
use kernel::interface::clock::DependOnClock;
use kernel::interface::query::{
    DependOnBookSeedQuery, DependOnCatalogQuery, DependOnSimilarBookQuery,
};
use kernel::interface::storage::DependOnKeyValueStore;
use kernel::interface::update::DependOnCatalogModifier;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self::from_handler(Handler::init()?).await)
    }

    /// Wraps `handler` and restores the persisted catalog into its session.
    pub async fn from_handler(handler: Handler) -> Self {
        {
            let mut session = handler.session().lock().await;
            let outcome = handler.load_catalog(&mut session).await;
            tracing::info!("catalog load: {outcome:?}");
        }
        Self(Arc::new(handler))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    storage: LocalStorage,
    repository: JsonCatalogRepository,
    search: ItBookClient,
    seed: JsonSeedFile,
    system_clock: SystemClock,
    session: Mutex<Session>,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let storage = LocalStorage::from_env()?;
        let search = ItBookClient::from_env()?;
        let seed = JsonSeedFile::from_env()?;
        Ok(Self::new(storage, search, seed))
    }

    pub fn new(storage: LocalStorage, search: ItBookClient, seed: JsonSeedFile) -> Self {
        Self {
            storage,
            repository: JsonCatalogRepository,
            search,
            seed,
            system_clock: SystemClock,
            session: Mutex::new(Session::new()),
        }
    }
}

impl DependOnKeyValueStore for Handler {
    type KeyValueStore = LocalStorage;
    fn key_value_store(&self) -> &Self::KeyValueStore {
        &self.storage
    }
}

impl DependOnCatalogQuery for Handler {
    type CatalogQuery = JsonCatalogRepository;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &self.repository
    }
}

impl DependOnCatalogModifier for Handler {
    type CatalogModifier = JsonCatalogRepository;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &self.repository
    }
}

impl DependOnSimilarBookQuery for Handler {
    type SimilarBookQuery = ItBookClient;
    fn similar_book_query(&self) -> &Self::SimilarBookQuery {
        &self.search
    }
}

impl DependOnBookSeedQuery for Handler {
    type BookSeedQuery = JsonSeedFile;
    fn book_seed_query(&self) -> &Self::BookSeedQuery {
        &self.seed
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.system_clock
    }
}
