use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::prelude::entity::{BookId, Borrower, Loan, LoanStatus, LoanWeeks};
use kernel::KernelError;

use crate::transfer::CreateLoanDto;
use crate::Session;

pub trait CreateLoanService: 'static + Sync + Send + DependOnClock {
    fn create_loan(
        &self,
        session: &mut Session,
        dto: CreateLoanDto,
    ) -> error_stack::Result<Loan, KernelError> {
        let borrower = dto.borrower.trim();
        if borrower.is_empty() {
            return Err(Report::new(KernelError::Invalid).attach_printable("borrower is required"));
        }
        let book_id = BookId::new(dto.book_id.trim());
        if book_id.is_empty() {
            return Err(Report::new(KernelError::Invalid).attach_printable("book is required"));
        }
        if !session.catalog().contains(&book_id) {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("no book with id {book_id}")));
        }
        if session.loan_status(&book_id) == LoanStatus::OnLoan {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("book {book_id} is already on loan")));
        }

        let weeks = LoanWeeks::clamped(dto.weeks);
        let loan = session.ledger_mut().create_loan(
            Borrower::new(borrower),
            book_id,
            weeks,
            self.clock().today(),
        );
        tracing::info!(
            book = loan.book_id().as_str(),
            due = %loan.due_date(),
            "loan created"
        );
        Ok(loan)
    }
}

impl<T> CreateLoanService for T where T: DependOnClock {}

#[cfg(test)]
mod test {
    use time::Duration;

    use kernel::prelude::entity::{BookDraft, BookId, DueDate};
    use kernel::KernelError;

    use crate::service::mock::MockModule;
    use crate::service::{CreateBookService, CreateLoanService};
    use crate::transfer::{CreateBookDto, CreateLoanDto};
    use crate::Session;

    async fn stocked(module: &MockModule) -> (Session, BookId) {
        let mut session = Session::new();
        let dto = CreateBookDto {
            id: Some("dune".to_string()),
            draft: BookDraft {
                title: "Dune".to_string(),
                ..Default::default()
            },
        };
        let id = module.create_book(&mut session, dto).await.unwrap();
        (session, id)
    }

    fn loan(borrower: &str, book_id: &str, weeks: i64) -> CreateLoanDto {
        CreateLoanDto {
            borrower: borrower.to_string(),
            book_id: book_id.to_string(),
            weeks,
        }
    }

    #[tokio::test]
    async fn borrower_is_trimmed_and_weeks_clamped() {
        let module = MockModule::default();
        let (mut session, _) = stocked(&module).await;
        let created = module
            .create_loan(&mut session, loan("  Ana  ", "dune", 9))
            .unwrap();
        assert_eq!(created.borrower().as_ref(), "Ana");
        assert_eq!(
            created.due_date(),
            &DueDate::new(module.today() + Duration::days(28))
        );
    }

    #[tokio::test]
    async fn blank_inputs_are_invalid() {
        let module = MockModule::default();
        let (mut session, _) = stocked(&module).await;
        let err = module
            .create_loan(&mut session, loan("   ", "dune", 1))
            .unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));
        let err = module.create_loan(&mut session, loan("Ana", "", 1)).unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));
        assert!(session.ledger().loans().is_empty());
    }

    #[tokio::test]
    async fn unavailable_book_is_rejected() {
        let module = MockModule::default();
        let (mut session, _) = stocked(&module).await;
        module.create_loan(&mut session, loan("Ana", "dune", 1)).unwrap();
        let err = module.create_loan(&mut session, loan("Bo", "dune", 1)).unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Conflict));

        let err = module.create_loan(&mut session, loan("Bo", "nope", 1)).unwrap_err();
        assert!(matches!(err.current_context(), KernelError::NotFound));
        assert_eq!(session.ledger().loans().len(), 1);
    }
}
