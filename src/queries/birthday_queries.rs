use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::model::AddressBook;

/// A contact whose birthday falls within the next week, with the date
/// the congratulation should actually happen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// Reports contacts whose next birthday occurrence is within 6 days of
/// `today` (inclusive on both ends; a birthday exactly 7 days out is
/// excluded). Results are in book iteration order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for record in book.records() {
        let birthday = match record.birthday() {
            Some(b) => b.date(),
            None => continue,
        };

        let occurrence = next_occurrence(birthday, today);
        let days_until = (occurrence - today).num_days();
        if (0..=6).contains(&days_until) {
            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(occurrence),
            });
        }
    }

    upcoming
}

/// The date the birthday next occurs on: this year's month/day, or next
/// year's if this year's has already passed (strictly before `today`).
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Shifts a weekend occurrence to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence + Days::new(shift)
}

/// A February 29 birthday is observed on March 1 in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 always exists"))
}
