use vodca::References;

use kernel::prelude::entity::{BookId, SimilarBook, SimilarQuery, SIMILAR_BOOKS_LIMIT};
use kernel::KernelError;

pub const SIMILAR_BOOKS_ADVISORY: &str = "Could not load similar books.";

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum SimilarBooksState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<SimilarBook>),
    Failed(String),
}

/// Handle for one in-flight search. Resolving with a ticket from an older
/// generation is ignored.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct LookupTicket {
    generation: u64,
    query: SimilarQuery,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct SimilarBooksSlot {
    generation: u64,
    query: SimilarQuery,
    state: SimilarBooksState,
}

impl SimilarBooksSlot {
    /// Supersedes whatever was running. An empty query never reaches the network.
    pub fn begin(&mut self, query: SimilarQuery) -> Option<LookupTicket> {
        self.generation += 1;
        self.query = query.clone();
        if query.is_empty() {
            self.state = SimilarBooksState::Loaded(Vec::new());
            return None;
        }
        self.state = SimilarBooksState::Loading;
        Some(LookupTicket {
            generation: self.generation,
            query,
        })
    }

    pub fn resolve(
        &mut self,
        ticket: &LookupTicket,
        result: error_stack::Result<Vec<SimilarBook>, KernelError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                query = ticket.query.as_str(),
                "discarding superseded similar-books result"
            );
            return false;
        }
        self.state = match result {
            Ok(mut books) => {
                books.truncate(SIMILAR_BOOKS_LIMIT);
                SimilarBooksState::Loaded(books)
            }
            Err(report) => {
                tracing::warn!(query = ticket.query.as_str(), "similar-books lookup failed: {report:?}");
                SimilarBooksState::Failed(SIMILAR_BOOKS_ADVISORY.to_string())
            }
        };
        true
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.query = SimilarQuery::default();
        self.state = SimilarBooksState::Idle;
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct BookDetails {
    viewing: Option<BookId>,
    similar: SimilarBooksSlot,
}

impl BookDetails {
    pub fn open(&mut self, id: BookId, query: SimilarQuery) -> Option<LookupTicket> {
        self.viewing = Some(id);
        self.similar.begin(query)
    }

    pub fn close(&mut self) {
        self.viewing = None;
        self.similar.cancel();
    }

    pub(crate) fn similar_mut(&mut self) -> &mut SimilarBooksSlot {
        &mut self.similar
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use kernel::prelude::entity::{SimilarBook, SimilarQuery};
    use kernel::KernelError;

    use crate::{SimilarBooksSlot, SimilarBooksState, SIMILAR_BOOKS_ADVISORY};

    fn hits(count: usize) -> Vec<SimilarBook> {
        (0..count)
            .map(|i| SimilarBook::new(format!("Hit {i}"), "", "$1.00", "", "", format!("{i}")))
            .collect()
    }

    #[test]
    fn empty_query_settles_without_ticket() {
        let mut slot = SimilarBooksSlot::default();
        assert!(slot.begin(SimilarQuery::new("")).is_none());
        assert_eq!(slot.state(), &SimilarBooksState::Loaded(Vec::new()));
    }

    #[test]
    fn results_are_capped_at_six() {
        let mut slot = SimilarBooksSlot::default();
        let ticket = slot.begin(SimilarQuery::new("Dune")).unwrap();
        assert_eq!(slot.state(), &SimilarBooksState::Loading);
        assert!(slot.resolve(&ticket, Ok(hits(9))));
        match slot.state() {
            SimilarBooksState::Loaded(books) => assert_eq!(books.len(), 6),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn superseded_result_is_ignored() {
        let mut slot = SimilarBooksSlot::default();
        let first = slot.begin(SimilarQuery::new("Dune")).unwrap();
        let second = slot.begin(SimilarQuery::new("Emma")).unwrap();

        assert!(slot.resolve(&second, Ok(hits(2))));
        assert!(!slot.resolve(&first, Ok(hits(5))));
        match slot.state() {
            SimilarBooksState::Loaded(books) => assert_eq!(books.len(), 2),
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(slot.query().as_str(), "Emma");
    }

    #[test]
    fn failure_shows_advisory() {
        let mut slot = SimilarBooksSlot::default();
        let ticket = slot.begin(SimilarQuery::new("Dune")).unwrap();
        slot.resolve(&ticket, Err(Report::new(KernelError::Network)));
        assert_eq!(
            slot.state(),
            &SimilarBooksState::Failed(SIMILAR_BOOKS_ADVISORY.to_string())
        );
    }

    #[test]
    fn cancel_drops_pending_result() {
        let mut slot = SimilarBooksSlot::default();
        let ticket = slot.begin(SimilarQuery::new("Dune")).unwrap();
        slot.cancel();
        assert!(!slot.resolve(&ticket, Ok(hits(1))));
        assert_eq!(slot.state(), &SimilarBooksState::Idle);
    }
}
