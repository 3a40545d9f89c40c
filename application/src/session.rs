use error_stack::Report;
use vodca::References;

use kernel::prelude::entity::{
    Book, BookFilter, BookId, Catalog, FilterOptions, LoanLedger, LoanStatus, LoanView,
    SimilarBook, SimilarQuery,
};
use kernel::KernelError;

use crate::{BookDetails, BookForm, LookupTicket};

#[derive(Debug, Clone, Default, References)]
pub struct Session {
    catalog: Catalog,
    ledger: LoanLedger,
    filter: BookFilter,
    form: BookForm,
    details: BookDetails,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_books(&self) -> Vec<&Book> {
        self.filter.apply(self.catalog.books())
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(self.catalog.books())
    }

    pub fn set_filter(&mut self, filter: BookFilter) {
        self.filter = filter;
    }

    pub fn toggle_selection(&mut self, id: &BookId) -> error_stack::Result<(), KernelError> {
        require(&self.catalog, id)?;
        self.catalog.toggle_selection(id.clone());
        Ok(())
    }

    pub fn available_books(&self) -> Vec<&Book> {
        self.ledger.available_books(&self.catalog)
    }

    pub fn loan_status(&self, id: &BookId) -> LoanStatus {
        self.ledger.status(id)
    }

    pub fn loan_views(&self) -> Vec<LoanView> {
        self.ledger.views(&self.catalog)
    }

    pub fn viewed_book(&self) -> Option<&Book> {
        self.details
            .viewing()
            .as_ref()
            .and_then(|id| self.catalog.find(id))
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn open_edit_form(&mut self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let book = require(&self.catalog, id)?;
        self.form.open_edit(book);
        Ok(())
    }

    pub fn open_details(
        &mut self,
        id: &BookId,
    ) -> error_stack::Result<Option<LookupTicket>, KernelError> {
        let query = SimilarQuery::for_book(require(&self.catalog, id)?);
        Ok(self.details.open(id.clone(), query))
    }

    pub fn close_details(&mut self) {
        self.details.close();
    }

    pub fn sync_details(&mut self) -> Option<LookupTicket> {
        let query = SimilarQuery::for_book(self.viewed_book()?);
        if &query == self.details.similar().query() {
            return None;
        }
        self.details.similar_mut().begin(query)
    }

    pub fn resolve_similar(
        &mut self,
        ticket: &LookupTicket,
        result: error_stack::Result<Vec<SimilarBook>, KernelError>,
    ) -> bool {
        self.details.similar_mut().resolve(ticket, result)
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut LoanLedger {
        &mut self.ledger
    }

    pub(crate) fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Drops transient state that pointed at a deleted book. Loans are kept.
    pub(crate) fn forget(&mut self, id: &BookId) {
        self.form.release(id);
        if self.details.viewing().as_ref() == Some(id) {
            self.details.close();
        }
    }
}

fn require<'a>(catalog: &'a Catalog, id: &BookId) -> error_stack::Result<&'a Book, KernelError> {
    catalog.find(id).ok_or_else(|| {
        Report::new(KernelError::NotFound).attach_printable(format!("no book with id {id}"))
    })
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{
        Book, BookDraft, BookFilter, BookId, BookLanguage, Catalog, SimilarBook,
    };

    use crate::{Session, SimilarBooksState};

    fn book(id: &str, title: &str, language: &str) -> Book {
        let draft = BookDraft {
            title: title.to_string(),
            language: language.to_string(),
            ..Default::default()
        };
        Book::new(BookId::new(id), draft)
    }

    fn session() -> Session {
        let mut session = Session::new();
        session.replace_catalog(Catalog::new(vec![
            book("a", "Dune", "English"),
            book("b", "Emma", "French"),
        ]));
        session
    }

    #[test]
    fn filter_narrows_visible_books_only() {
        let mut session = session();
        session.set_filter(BookFilter::new(None, Some(BookLanguage::new("French"))));
        let visible = session.visible_books();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), &BookId::new("b"));
        assert_eq!(session.filter_options().languages().len(), 2);
    }

    #[test]
    fn unknown_identity_is_not_found() {
        let mut session = session();
        assert!(session.toggle_selection(&BookId::new("zzz")).is_err());
        assert!(session.open_edit_form(&BookId::new("zzz")).is_err());
        assert!(session.open_details(&BookId::new("zzz")).is_err());
    }

    #[test]
    fn details_lookup_uses_title() {
        let mut session = session();
        let ticket = session.open_details(&BookId::new("a")).unwrap().unwrap();
        assert_eq!(ticket.query().as_str(), "Dune");
        assert_eq!(session.viewed_book().unwrap().id(), &BookId::new("a"));
        assert!(session.resolve_similar(&ticket, Ok(vec![SimilarBook::default()])));
        assert!(matches!(
            session.details().similar().state(),
            SimilarBooksState::Loaded(books) if books.len() == 1
        ));
    }

    #[test]
    fn reopening_details_supersedes_previous_lookup() {
        let mut session = session();
        let dune = session.open_details(&BookId::new("a")).unwrap().unwrap();
        let emma = session.open_details(&BookId::new("b")).unwrap().unwrap();
        assert!(!session.resolve_similar(&dune, Ok(vec![SimilarBook::default()])));
        assert!(session.resolve_similar(&emma, Ok(Vec::new())));
        assert_eq!(
            session.details().similar().state(),
            &SimilarBooksState::Loaded(Vec::new())
        );
    }

    #[test]
    fn sync_is_quiet_while_query_is_unchanged() {
        let mut session = session();
        session.open_details(&BookId::new("a")).unwrap();
        assert!(session.sync_details().is_none());
    }

    #[test]
    fn forgetting_viewed_book_closes_details() {
        let mut session = session();
        session.open_details(&BookId::new("a")).unwrap();
        session.open_edit_form(&BookId::new("a")).unwrap();
        session.forget(&BookId::new("a"));
        assert!(session.details().viewing().is_none());
        assert!(!session.form().is_open());
    }
}
