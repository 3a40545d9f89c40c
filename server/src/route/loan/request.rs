use serde::Deserialize;

use application::transfer::CreateLoanDto;
use kernel::prelude::entity::MIN_LOAN_WEEKS;

use crate::controller::Intake;

/// Loan period as sent by clients: a JSON number or numeric text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WeeksRequest {
    Number(f64),
    Text(String),
}

impl WeeksRequest {
    // Fractions truncate; text that is not a number counts as zero and clamps up.
    fn whole(&self) -> i64 {
        match self {
            WeeksRequest::Number(weeks) => *weeks as i64,
            WeeksRequest::Text(weeks) => weeks.trim().parse::<f64>().unwrap_or(0.0) as i64,
        }
    }
}

impl Default for WeeksRequest {
    fn default() -> Self {
        WeeksRequest::Number(f64::from(MIN_LOAN_WEEKS))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[serde(default)]
    borrower: String,
    #[serde(default)]
    book_id: String,
    #[serde(default)]
    weeks: WeeksRequest,
}

pub struct LoanTransformer;

impl Intake<CreateLoanRequest> for LoanTransformer {
    type To = CreateLoanDto;
    fn emit(&self, input: CreateLoanRequest) -> Self::To {
        CreateLoanDto {
            borrower: input.borrower,
            book_id: input.book_id,
            weeks: input.weeks.whole(),
        }
    }
}
