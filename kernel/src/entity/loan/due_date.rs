use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};
use vodca::{AsRefln, Fromln};

use crate::entity::LoanWeeks;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Fromln, AsRefln)]
pub struct DueDate(Date);

impl DueDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn after(start: Date, weeks: LoanWeeks) -> Self {
        Self(start.saturating_add(Duration::days(weeks.days())))
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0.format(DATE_FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, DATE_FORMAT)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::entity::{DueDate, LoanWeeks};

    #[test]
    fn due_date_is_seven_days_per_week() {
        let due = DueDate::after(date!(2024 - 02 - 20), LoanWeeks::new(2));
        assert_eq!(due, DueDate::new(date!(2024 - 03 - 05)));
    }

    #[test]
    fn serializes_as_calendar_date() {
        let due = DueDate::new(date!(2024 - 03 - 05));
        assert_eq!(serde_json::to_string(&due).unwrap(), "\"2024-03-05\"");
        let back: DueDate = serde_json::from_str("\"2024-03-05\"").unwrap();
        assert_eq!(back, due);
    }
}
