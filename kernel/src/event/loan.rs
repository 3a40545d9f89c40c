use crate::entity::{Loan, LoanLedger};
use crate::event::Applier;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoanEvent {
    Lent { loan: Loan },
}

impl Applier<LoanEvent> for LoanLedger {
    fn apply(&mut self, event: LoanEvent) {
        match event {
            LoanEvent::Lent { loan } => self.push(loan),
        }
    }
}
