//! End-to-end checks of the helpers as a form screen uses them:
//! validate the input, convert it to the wire format, diff it against the stored record.

use chrono::NaiveDate;
use forms::brazilian_format::{
    format_brl, parse_brl, parse_brl_value, to_display_date, to_display_date_from_iso, to_iso_date,
    to_iso_from_display_date,
};
use forms::validation::{message, schema, validators};
use forms::FormsError;
use serde_json::{json, Value};
use shared::models::Rent;
use shared::utils::{capitalize_words, diff_fields, diff_records};

#[test]
fn test_dates_survive_the_display_round_trip() {
    let samples = [(1, 1, 1), (1970, 1, 1), (2023, 10, 5), (2024, 2, 29), (9999, 12, 31)];
    for (y, m, d) in samples {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let iso = to_iso_date(date).unwrap();
        let display = to_display_date_from_iso(&iso).unwrap();
        assert_eq!(to_iso_from_display_date(&display).unwrap(), iso, "round trip failed for {}", iso);
    }
}

#[test]
fn test_the_two_display_formats_differ_in_padding() {
    let date = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
    assert_eq!(to_display_date(date).unwrap(), "5/10/2023");
    assert_eq!(to_display_date_from_iso("2023-10-05").unwrap(), "05/10/2023");
}

#[test]
fn test_amounts_survive_the_display_round_trip() {
    for cents in [0i64, 1, 99, 4000, 123_456, -123_456, 987_654_321] {
        let amount = cents as f64 / 100.0;
        let parsed = parse_brl(&format_brl(amount).unwrap()).unwrap();
        assert!((parsed - amount).abs() < 1e-9, "{} came back as {}", amount, parsed);
    }
}

#[test]
fn test_currency_examples() {
    assert_eq!(format_brl(1234.56).unwrap(), "1.234,56");
    assert_eq!(format_brl(40.0).unwrap(), "40,00");
    assert_eq!(parse_brl("R$ 1.234,56").unwrap(), 1234.56);
    assert_eq!(parse_brl("1.234,56").unwrap(), 1234.56);
    assert_eq!(parse_brl(" R$  1.234,56 ").unwrap(), 1234.56);
}

#[test]
fn test_currency_failure_kinds_are_distinguishable() {
    assert!(matches!(parse_brl("invalid"), Err(FormsError::MalformedAmount(_))));
    assert!(matches!(parse_brl(""), Err(FormsError::MissingAmount)));
    assert!(matches!(parse_brl_value(&json!(1234)), Err(FormsError::MissingAmount)));
}

#[test]
fn test_validator_examples() {
    assert!(!message(&validators::email("")).is_empty());
    assert!(!message(&validators::email("not-an-email")).is_empty());
    assert_eq!(message(&validators::email("a@b.co")), "");

    assert!(message(&validators::name("John123")).contains("números"));
    assert!(message(&validators::name("Jo")).contains("5 caracteres"));
    assert_eq!(message(&validators::name("Jonathan")), "");
}

#[test]
fn test_diff_and_capitalize_examples() {
    let original = json!({ "a": 1, "b": 2 });
    let updated = json!({ "a": 1, "b": 3, "c": 4 });
    let diff = diff_fields(original.as_object().unwrap(), updated.as_object().unwrap());
    assert_eq!(Value::Object(diff), json!({ "b": 3, "c": 4 }));

    assert_eq!(capitalize_words("hello   world"), "Hello   World");
    assert_eq!(capitalize_words("hElLo WoRLd"), "HElLo WoRLd");
}

#[test]
fn test_rent_edit_flow_produces_a_minimal_patch() {
    let stored = Rent {
        id: Some(4),
        house_id: 2,
        tenant_id: 5,
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        value: 1250.0,
        deposit: None,
        due_day: 10,
    };

    // What the edit screen shows and what the user typed over it.
    let form = json!({
        "houseId": stored.house_id,
        "tenantId": stored.tenant_id,
        "startDate": to_display_date_from_iso(&to_iso_date(stored.start_date).unwrap()).unwrap(),
        "endDate": "31/07/2025",
        "value": "R$ 1.300,00",
        "dueDay": stored.due_day,
    });
    let report = schema::rent().validate(form.as_object().unwrap());
    assert!(report.is_valid(), "unexpected failures: {:?}", report.errors());

    let mut edited = stored.clone();
    let end_iso = to_iso_from_display_date(form["endDate"].as_str().unwrap()).unwrap();
    edited.end_date = NaiveDate::parse_from_str(&end_iso, "%Y-%m-%d").unwrap();
    edited.value = parse_brl_value(&form["value"]).unwrap();

    let patch = diff_records(&stored, &edited).unwrap();
    assert_eq!(Value::Object(patch), json!({ "endDate": "2025-07-31", "value": 1300.0 }));
}
