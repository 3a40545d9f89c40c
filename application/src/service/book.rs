use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::event::{Applier, BookEvent};
use kernel::interface::query::{CatalogQuery, DependOnCatalogQuery};
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::{Book, BookId, Catalog};
use kernel::KernelError;

use crate::transfer::{CatalogLoad, CreateBookDto, DeleteBookDto, UpdateBookDto};
use crate::{FormSubmission, Session};

pub const UNTITLED: &str = "Untitled";

#[async_trait::async_trait]
pub trait LoadCatalogService: 'static + Sync + Send + DependOnCatalogQuery {
    /// Never fails: an unreadable snapshot leaves the session with an empty catalog.
    async fn load_catalog(&self, session: &mut Session) -> CatalogLoad {
        let loaded = self.catalog_query().load(self.key_value_store()).await;
        match loaded {
            Ok(Some(books)) if !books.is_empty() => {
                let (catalog, dropped) = Catalog::from_snapshot(books);
                if dropped > 0 {
                    tracing::warn!(dropped, "snapshot contained duplicate book ids");
                }
                let books = catalog.len();
                session.replace_catalog(catalog);
                tracing::info!(books, "catalog restored");
                CatalogLoad::Restored { books, dropped }
            }
            Ok(_) => {
                session.replace_catalog(Catalog::default());
                CatalogLoad::Empty
            }
            Err(report) => {
                tracing::error!("failed to read catalog snapshot: {report:?}");
                session.replace_catalog(Catalog::default());
                CatalogLoad::Recovered
            }
        }
    }
}

impl<T> LoadCatalogService for T where T: DependOnCatalogQuery {}

#[async_trait::async_trait]
pub trait SaveCatalogService: 'static + Sync + Send + DependOnCatalogModifier {
    async fn save_catalog(&self, catalog: &Catalog) -> error_stack::Result<(), KernelError> {
        match self
            .catalog_modifier()
            .save(self.key_value_store(), catalog.books())
            .await
        {
            Ok(()) => {
                tracing::debug!(books = catalog.len(), "catalog snapshot written");
                Ok(())
            }
            Err(report) => {
                tracing::error!("failed to write catalog snapshot: {report:?}");
                Err(report)
            }
        }
    }
}

impl<T> SaveCatalogService for T where T: DependOnCatalogModifier {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + SaveCatalogService + DependOnClock {
    async fn create_book(
        &self,
        session: &mut Session,
        dto: CreateBookDto,
    ) -> error_stack::Result<BookId, KernelError> {
        let catalog = session.catalog_mut();
        let id = match dto.id.map(BookId::new).filter(|id| !id.is_empty()) {
            Some(id) if catalog.contains(&id) => {
                return Err(Report::new(KernelError::Conflict)
                    .attach_printable(format!("book {id} already exists")));
            }
            Some(id) => id,
            None => catalog.fresh_id(self.clock().now()),
        };

        let mut draft = dto.draft;
        if draft.title.trim().is_empty() {
            draft.title = UNTITLED.to_string();
        }
        catalog.apply(BookEvent::Create {
            book: Book::new(id.clone(), draft),
        });
        tracing::info!(id = id.as_str(), "book added");

        self.save_catalog(session.catalog()).await?;
        Ok(id)
    }
}

impl<T> CreateBookService for T where T: SaveCatalogService + DependOnClock {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + SaveCatalogService {
    /// Returns whether the book existed. The snapshot is rewritten either way.
    async fn update_book(
        &self,
        session: &mut Session,
        dto: UpdateBookDto,
    ) -> error_stack::Result<bool, KernelError> {
        let (id, patch) = dto.into_patch();
        let found = session.catalog().contains(&id);
        if !found {
            tracing::debug!(id = id.as_str(), "update for unknown book ignored");
        }
        session.catalog_mut().apply(BookEvent::Update { id, patch });

        self.save_catalog(session.catalog()).await?;
        Ok(found)
    }
}

impl<T> UpdateBookService for T where T: SaveCatalogService {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + SaveCatalogService {
    async fn delete_book(
        &self,
        session: &mut Session,
        dto: DeleteBookDto,
    ) -> error_stack::Result<bool, KernelError> {
        let id = BookId::new(dto.id);
        let found = session.catalog().contains(&id);
        session.catalog_mut().apply(BookEvent::Delete { id: id.clone() });
        session.forget(&id);
        if found {
            tracing::info!(id = id.as_str(), "book removed");
        }

        self.save_catalog(session.catalog()).await?;
        Ok(found)
    }
}

impl<T> DeleteBookService for T where T: SaveCatalogService {}

#[async_trait::async_trait]
pub trait SubmitBookFormService: 'static + Sync + Send + CreateBookService + UpdateBookService {
    async fn submit_book_form(
        &self,
        session: &mut Session,
    ) -> error_stack::Result<BookId, KernelError> {
        let submission = session.form_mut().submit().ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable("book form is not open")
        })?;
        match submission {
            FormSubmission::Create(draft) => {
                self.create_book(session, CreateBookDto { id: None, draft })
                    .await
            }
            FormSubmission::Update { id, draft } => {
                self.update_book(session, UpdateBookDto::overwrite(id.clone(), draft))
                    .await?;
                Ok(id)
            }
        }
    }
}

impl<T> SubmitBookFormService for T where T: CreateBookService + UpdateBookService {}

#[cfg(test)]
mod test {
    use rand::seq::SliceRandom;
    use rand::Rng;
    use time::Duration;

    use kernel::prelude::entity::{BookDraft, BookField, BookId, DueDate, LoanStatus};
    use kernel::KernelError;

    use crate::service::mock::MockModule;
    use crate::service::{
        CreateBookService, CreateLoanService, DeleteBookService, LoadCatalogService,
        SubmitBookFormService, UpdateBookService, UNTITLED,
    };
    use crate::transfer::{
        CatalogLoad, CreateBookDto, CreateLoanDto, DeleteBookDto, UpdateBookDto,
    };
    use crate::Session;

    fn draft(title: &str, publisher: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            publisher: publisher.to_string(),
            ..Default::default()
        }
    }

    fn create(title: &str, publisher: &str) -> CreateBookDto {
        CreateBookDto {
            id: None,
            draft: draft(title, publisher),
        }
    }

    #[tokio::test]
    async fn add_prepends_and_persists() {
        let module = MockModule::default();
        let mut session = Session::new();
        let first = module.create_book(&mut session, create("Dune", "Ace")).await.unwrap();
        let second = module.create_book(&mut session, create("Emma", "")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(session.catalog().books()[0].id(), &second);
        assert_eq!(module.snapshot().unwrap(), session.catalog().books().to_vec());
    }

    #[tokio::test]
    async fn same_millisecond_ids_get_suffixed() {
        let module = MockModule::default();
        let mut session = Session::new();
        let first = module.create_book(&mut session, create("A", "")).await.unwrap();
        let second = module.create_book(&mut session, create("B", "")).await.unwrap();
        assert_eq!(second, first.with_suffix(1));
    }

    #[tokio::test]
    async fn supplied_duplicate_id_is_conflict() {
        let module = MockModule::default();
        let mut session = Session::new();
        let dto = || CreateBookDto {
            id: Some("9781617294136".to_string()),
            draft: draft("Rust", ""),
        };
        module.create_book(&mut session, dto()).await.unwrap();
        let writes = module.writes();
        let err = module.create_book(&mut session, dto()).await.unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Conflict));
        assert_eq!(module.writes(), writes);
        assert_eq!(session.catalog().len(), 1);
    }

    #[tokio::test]
    async fn blank_title_becomes_untitled() {
        let module = MockModule::default();
        let mut session = Session::new();
        let id = module.create_book(&mut session, create("  ", "Ace")).await.unwrap();
        let book = session.catalog().find(&id).unwrap();
        assert_eq!(book.title().as_ref(), UNTITLED);
    }

    #[tokio::test]
    async fn update_merges_and_keeps_identity() {
        let module = MockModule::default();
        let mut session = Session::new();
        let id = module.create_book(&mut session, create("Dune", "Ace")).await.unwrap();
        let dto = UpdateBookDto {
            id: id.as_str().to_string(),
            publisher: Some("Penguin".to_string()),
            ..Default::default()
        };
        assert!(module.update_book(&mut session, dto).await.unwrap());

        let book = session.catalog().find(&id).unwrap();
        assert_eq!(book.publisher().as_ref(), "Penguin");
        assert_eq!(book.title().as_ref(), "Dune");
        assert_eq!(module.snapshot().unwrap(), session.catalog().books().to_vec());
    }

    #[tokio::test]
    async fn update_of_missing_book_still_writes() {
        let module = MockModule::default();
        let mut session = Session::new();
        let dto = UpdateBookDto {
            id: "ghost".to_string(),
            title: Some("Boo".to_string()),
            ..Default::default()
        };
        assert!(!module.update_book(&mut session, dto).await.unwrap());
        assert_eq!(module.writes(), 1);
        assert!(session.catalog().is_empty());
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_state() {
        let module = MockModule::default();
        module.fail_writes(true);
        let mut session = Session::new();
        let err = module.create_book(&mut session, create("Dune", "")).await.unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Internal));
        assert_eq!(session.catalog().len(), 1);
        assert!(module.snapshot().is_none());
    }

    #[tokio::test]
    async fn load_recovers_from_unreadable_snapshot() {
        let module = MockModule::default();
        module.fail_reads(true);
        let mut session = Session::new();
        assert_eq!(module.load_catalog(&mut session).await, CatalogLoad::Recovered);
        assert!(session.catalog().is_empty());

        module.fail_reads(false);
        assert_eq!(module.load_catalog(&mut session).await, CatalogLoad::Empty);
    }

    #[tokio::test]
    async fn form_submission_routes_to_create_or_update() {
        let module = MockModule::default();
        let mut session = Session::new();

        session.form_mut().open_create();
        session.form_mut().set_field(BookField::Title, "Dune").unwrap();
        session.form_mut().set_field(BookField::Publisher, "Ace").unwrap();
        let id = module.submit_book_form(&mut session).await.unwrap();
        assert!(!session.form().is_open());

        session.open_edit_form(&id).unwrap();
        session.form_mut().set_field(BookField::Publisher, "Penguin").unwrap();
        let edited = module.submit_book_form(&mut session).await.unwrap();
        assert_eq!(edited, id);
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(
            session.catalog().find(&id).unwrap().publisher().as_ref(),
            "Penguin"
        );

        let err = module.submit_book_form(&mut session).await.unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));
    }

    #[tokio::test]
    async fn dune_walkthrough() {
        let module = MockModule::default();
        let mut session = Session::new();
        let id = module.create_book(&mut session, create("Dune", "Ace")).await.unwrap();

        let loan = module
            .create_loan(
                &mut session,
                CreateLoanDto {
                    borrower: "Ana".to_string(),
                    book_id: id.as_str().to_string(),
                    weeks: 2,
                },
            )
            .unwrap();
        assert_eq!(
            loan.due_date(),
            &DueDate::new(module.today() + Duration::days(14))
        );
        assert!(session.available_books().is_empty());
        assert_eq!(session.loan_status(&id), LoanStatus::OnLoan);

        let dto = UpdateBookDto {
            id: id.as_str().to_string(),
            publisher: Some("Penguin".to_string()),
            ..Default::default()
        };
        module.update_book(&mut session, dto).await.unwrap();
        assert_eq!(
            session.catalog().find(&id).unwrap().publisher().as_ref(),
            "Penguin"
        );

        let removed = module
            .delete_book(
                &mut session,
                DeleteBookDto {
                    id: id.as_str().to_string(),
                },
            )
            .await
            .unwrap();
        assert!(removed);
        let views = session.loan_views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].book_label(), id.as_str());
    }

    #[tokio::test]
    async fn random_mutations_keep_snapshot_in_sync() {
        let module = MockModule::default();
        let mut session = Session::new();
        let mut rng = rand::thread_rng();
        let publishers = ["Ace", "Penguin", "Vintage", ""];

        for step in 0..60 {
            let ids = session
                .catalog()
                .books()
                .iter()
                .map(|book| book.id().clone())
                .collect::<Vec<BookId>>();
            match rng.gen_range(0..3) {
                0 => {
                    let publisher = publishers.choose(&mut rng).copied().unwrap_or_default();
                    module
                        .create_book(&mut session, create(&format!("Book {step}"), publisher))
                        .await
                        .unwrap();
                }
                1 => {
                    if let Some(id) = ids.choose(&mut rng) {
                        let dto = UpdateBookDto {
                            id: id.as_str().to_string(),
                            title: Some(format!("Edited {step}")),
                            ..Default::default()
                        };
                        module.update_book(&mut session, dto).await.unwrap();
                    }
                }
                _ => {
                    if let Some(id) = ids.choose(&mut rng) {
                        let dto = DeleteBookDto {
                            id: id.as_str().to_string(),
                        };
                        module.delete_book(&mut session, dto).await.unwrap();
                    }
                }
            }
            if module.writes() > 0 {
                assert_eq!(module.snapshot().unwrap(), session.catalog().books().to_vec());
            }
        }

        let mut reloaded = Session::new();
        module.load_catalog(&mut reloaded).await;
        assert_eq!(reloaded.catalog().books(), session.catalog().books());
    }
}
