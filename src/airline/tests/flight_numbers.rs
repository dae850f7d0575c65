use crate::airline::tests::utils::{numbered_airline, rng};
use crate::error::AirlineError;

#[test]
fn test_digit_flight_number() {
    let airline = numbered_airline(3, false);
    let mut rng = rng();

    for _ in 0..100 {
        let number = airline.generate_flight_number(&mut rng).unwrap();
        assert_eq!(number.len(), 3);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(number.chars().next(), Some('0'));
    }
}

#[test]
fn test_alpha_numeric_flight_number_is_one_short() {
    let airline = numbered_airline(6, true);
    let mut rng = rng();

    for _ in 0..100 {
        let number = airline.generate_flight_number(&mut rng).unwrap();
        assert_eq!(number.len(), 5, "{}", number);
        let (digits, letters) = number.split_at(3);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(digits.chars().next(), Some('0'));
        assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_short_lengths_keep_leading_digit() {
    let mut rng = rng();

    for length in 0..4 {
        let number = numbered_airline(length, true)
            .generate_flight_number(&mut rng)
            .unwrap();
        assert_eq!(number.len(), 3, "length {} gave {}", length, number);
        assert!(number.starts_with(|c: char| ('1'..='9').contains(&c)));
        assert!(number[1..].chars().all(|c| c.is_ascii_lowercase()));
    }

    let number = numbered_airline(0, false)
        .generate_flight_number(&mut rng)
        .unwrap();
    assert_eq!(number.len(), 1);
}

#[test]
fn test_generation_does_not_touch_ledger() {
    let airline = numbered_airline(4, false);
    airline.generate_flight_number(&mut rng()).unwrap();
    assert!(airline.flight_numbers().is_empty());
}

#[test]
fn test_missing_length() {
    let airline = crate::airline::Airline::from_value(&serde_json::json!({"icao": "NOL"})).unwrap();
    assert!(matches!(
        airline.generate_flight_number(&mut rng()),
        Err(AirlineError::MissingFlightNumberLength(icao)) if icao == "NOL"
    ));
}

#[test]
fn test_add_and_remove() {
    let mut airline = numbered_airline(3, false);

    airline.add_flight_number_to_in_use("332");
    assert!(airline.flight_numbers().contains(&"332".to_string()));

    airline.remove_flight_number("332");
    assert!(!airline.flight_numbers().contains(&"332".to_string()));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut airline = numbered_airline(3, false);
    airline.add_flight_number_to_in_use("101");

    airline.remove_flight_number("not-present");
    assert_eq!(airline.flight_numbers(), &["101".to_string()]);
}

#[test]
fn test_remove_takes_first_occurrence() {
    let mut airline = numbered_airline(3, false);
    airline.add_flight_number_to_in_use("101");
    airline.add_flight_number_to_in_use("202");
    airline.add_flight_number_to_in_use("101");

    airline.remove_flight_number("101");
    assert_eq!(
        airline.flight_numbers(),
        &["202".to_string(), "101".to_string()]
    );
}

#[test]
fn test_reset() {
    let mut airline = numbered_airline(3, false);
    airline.add_flight_number_to_in_use("101");
    airline.add_flight_number_to_in_use("202");

    airline.reset();
    assert!(airline.flight_numbers().is_empty());
    assert_eq!(airline.flight_number_length(), Some(3));
}
