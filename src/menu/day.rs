use std::fmt::{self, Display, Formatter};

use chrono::{Datelike, NaiveDate, Weekday};

/// A weekday with a lunch menu. Numbered 1 (Monday) through 5 (Friday).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Day {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl Day {
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based slot used by the per-day arrays in [`crate::menu::Menu`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            _ => None,
        }
    }

    /// The following day, staying on Friday.
    #[must_use]
    pub const fn next(self) -> Self {
        match Self::from_number(self.number() + 1) {
            Some(day) => day,
            None => Self::Friday,
        }
    }

    /// The previous day, staying on Monday.
    #[must_use]
    pub const fn prev(self) -> Self {
        match Self::from_number(self.number() - 1) {
            Some(day) => day,
            None => Self::Monday,
        }
    }

    /// Weekday of `date`, with Saturday and Sunday capped to Friday.
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri | Weekday::Sat | Weekday::Sun => Self::Friday,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
