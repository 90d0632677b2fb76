use abook::error::AbookError;
use abook::model::*;

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_starts_empty() {
    let record = Record::new("John".into());
    assert_eq!(record.name(), "John");
    assert!(record.phones().is_empty());
    assert_eq!(record.birthday(), None);
}

#[test]
fn add_phone_appends_in_order() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    record.add_phone("0987654321").unwrap();

    let numbers: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(numbers, vec!["1234567890", "0987654321"]);
}

#[test]
fn add_phone_rejects_invalid_input() {
    let mut record = Record::new("John".into());
    let err = record.add_phone("12345").unwrap_err();
    assert!(matches!(err, AbookError::InvalidPhone { .. }));
    assert!(record.phones().is_empty());
}

#[test]
fn duplicate_phones_are_allowed() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    record.add_phone("1234567890").unwrap();
    assert_eq!(record.phones().len(), 2);
}

#[test]
fn remove_phone_removes_first_match_only() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    record.add_phone("1234567890").unwrap();

    record.remove_phone("1234567890").unwrap();
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn remove_phone_missing_errors() {
    let mut record = Record::new("John".into());
    let err = record.remove_phone("1234567890").unwrap_err();
    assert!(matches!(err, AbookError::PhoneNotFound { .. }));
}

#[test]
fn find_phone_returns_match() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");
}

#[test]
fn find_phone_missing_errors() {
    let record = Record::new("John".into());
    assert!(matches!(
        record.find_phone("1234567890").unwrap_err(),
        AbookError::PhoneNotFound { .. }
    ));
}

#[test]
fn edit_phone_preserves_position() {
    let mut record = Record::new("John".into());
    record.add_phone("1111111111").unwrap();
    record.add_phone("2222222222").unwrap();
    record.add_phone("3333333333").unwrap();

    record.edit_phone("2222222222", "9999999999").unwrap();

    let numbers: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(numbers, vec!["1111111111", "9999999999", "3333333333"]);
}

#[test]
fn edit_phone_missing_old_number_errors() {
    let mut record = Record::new("John".into());
    record.add_phone("1111111111").unwrap();
    assert!(matches!(
        record.edit_phone("2222222222", "9999999999").unwrap_err(),
        AbookError::PhoneNotFound { .. }
    ));
}

#[test]
fn edit_phone_invalid_new_number_keeps_old() {
    let mut record = Record::new("John".into());
    record.add_phone("1111111111").unwrap();

    let err = record.edit_phone("1111111111", "bad").unwrap_err();
    assert!(matches!(err, AbookError::InvalidPhone { .. }));
    assert_eq!(record.phones()[0].as_str(), "1111111111");
}

#[test]
fn add_birthday_last_write_wins() {
    let mut record = Record::new("John".into());
    record.add_birthday("12.06.1990").unwrap();
    record.add_birthday("13.07.1991").unwrap();
    assert_eq!(record.birthday().unwrap().to_string(), "13.07.1991");
}

#[test]
fn add_birthday_rejects_bad_format() {
    let mut record = Record::new("John".into());
    let err = record.add_birthday("1990-06-12").unwrap_err();
    assert!(matches!(err, AbookError::InvalidDateFormat { .. }));
    assert_eq!(record.birthday(), None);
}

#[test]
fn display_without_birthday() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    record.add_phone("0987654321").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1234567890; 0987654321"
    );
}

#[test]
fn display_with_birthday() {
    let mut record = Record::new("John".into());
    record.add_phone("1234567890").unwrap();
    record.add_birthday("12.06.1990").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1234567890, birthday: 12.06.1990"
    );
}
