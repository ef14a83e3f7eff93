use std::str::FromStr;

use derive_more::Display;

/// Calendar date without time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

/// Date string or bytes did not describe a valid calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid calendar date")]
pub struct InvalidDate;

impl CalendarDate {
    /// Length of the wire form
    pub const WIRE_LEN: usize = 4;

    /// Create a date, validating month and day
    pub const fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month, 1 through 12
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Wire form: big-endian year, then month, then day
    pub const fn to_bytes(&self) -> [u8; 4] {
        let [high, low] = self.year.to_be_bytes();
        [high, low, self.month, self.day]
    }

    /// Read the wire form
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [high, low, month, day] => Self::new(u16::from_be_bytes([high, low]), month, day),
            _ => None,
        }
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDate;

    /// Parse `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or(InvalidDate);
        let year = next()?.parse().map_err(|_| InvalidDate)?;
        let month = next()?.parse().map_err(|_| InvalidDate)?;
        let day = next()?.parse().map_err(|_| InvalidDate)?;
        Self::new(year, month, day).ok_or(InvalidDate)
    }
}

const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_some());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(1900, 2, 29).is_none());
        assert!(CalendarDate::new(2000, 2, 29).is_some());
        assert!(CalendarDate::new(2024, 4, 31).is_none());
        assert!(CalendarDate::new(2024, 13, 1).is_none());
        assert!(CalendarDate::new(2024, 1, 0).is_none());
    }

    #[test]
    fn test_wire_form() {
        let date = CalendarDate::new(2019, 7, 15).unwrap();
        assert_eq!(date.to_bytes(), [0x07, 0xE3, 0x07, 0x0F]);
        assert_eq!(CalendarDate::from_bytes(&[0x07, 0xE3, 0x07, 0x0F]), Some(date));
        assert_eq!(CalendarDate::from_bytes(&[0x07, 0xE3, 0x07]), None);
        assert_eq!(CalendarDate::from_bytes(&[0x07, 0xE3, 0x00, 0x01]), None);
    }

    #[test]
    fn test_parse_and_display() {
        let date: CalendarDate = "2021-03-09".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2021, 3, 9).unwrap());
        assert_eq!(date.to_string(), "2021-03-09");
        assert_eq!("2021-02-30".parse::<CalendarDate>(), Err(InvalidDate));
        assert_eq!("2021/03/09".parse::<CalendarDate>(), Err(InvalidDate));
    }
}
