use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

pub const MIN_LOAN_WEEKS: u8 = 1;
pub const MAX_LOAN_WEEKS: u8 = 4;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct LoanWeeks(u8);

impl LoanWeeks {
    pub fn new(weeks: impl Into<u8>) -> Self {
        Self(weeks.into())
    }

    pub fn clamped(weeks: i64) -> Self {
        let weeks = weeks.clamp(i64::from(MIN_LOAN_WEEKS), i64::from(MAX_LOAN_WEEKS));
        Self(u8::try_from(weeks).unwrap_or(MIN_LOAN_WEEKS))
    }

    pub fn days(&self) -> i64 {
        i64::from(self.0) * 7
    }
}

impl Default for LoanWeeks {
    fn default() -> Self {
        Self(MIN_LOAN_WEEKS)
    }
}
