#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn draft(name: &str, amount: &str) -> Draft {
    Draft {
        name: name.into(),
        amount: amount.into(),
        ..Draft::default()
    }
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_plain_numbers() {
    assert_eq!(parse_amount("400"), dec!(400));
    assert_eq!(parse_amount("1200.00"), dec!(1200.00));
    assert_eq!(parse_amount("0.01"), dec!(0.01));
}

#[test]
fn test_parse_signs_and_whitespace() {
    assert_eq!(parse_amount("-12.5"), dec!(-12.5));
    assert_eq!(parse_amount("+3"), dec!(3));
    assert_eq!(parse_amount("   7"), dec!(7));
}

#[test]
fn test_parse_leading_or_trailing_dot() {
    assert_eq!(parse_amount(".5"), dec!(0.5));
    assert_eq!(parse_amount("5."), dec!(5));
}

#[test]
fn test_parse_stops_at_first_non_numeric() {
    assert_eq!(parse_amount("12abc"), dec!(12));
    assert_eq!(parse_amount("1,000"), dec!(1));
    assert_eq!(parse_amount("1.2.3"), dec!(1.2));
    assert_eq!(parse_amount("7 dollars"), dec!(7));
}

#[test]
fn test_parse_non_numeric_is_zero() {
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("abc"), Decimal::ZERO);
    assert_eq!(parse_amount("-"), Decimal::ZERO);
    assert_eq!(parse_amount("."), Decimal::ZERO);
    assert_eq!(parse_amount("$5"), Decimal::ZERO);
}

#[test]
fn test_parse_overflow_clamps() {
    let huge = "9".repeat(60);
    assert_eq!(parse_amount(&huge), Decimal::MAX);
    assert_eq!(parse_amount(&format!("-{huge}")), Decimal::MIN);
    assert_eq!(parse_amount("79228162514264337593543950335"), Decimal::MAX);
}

// ── Draft ─────────────────────────────────────────────────────

#[test]
fn test_validate_requires_name_and_amount() {
    assert_eq!(draft("", "10").validate(), Err(DraftError::MissingName));
    assert_eq!(draft("X", "").validate(), Err(DraftError::MissingAmount));
    assert_eq!(draft("", "").validate(), Err(DraftError::MissingName));
    assert!(draft("X", "10").validate().is_ok());
}

#[test]
fn test_validate_accepts_whitespace() {
    assert!(draft(" ", " ").validate().is_ok());
}

#[test]
fn test_optional_fields_not_required() {
    let d = Draft {
        category: String::new(),
        date: String::new(),
        ..draft("Rent", "400")
    };
    assert!(d.validate().is_ok());
}

#[test]
fn test_draft_error_display() {
    assert_eq!(DraftError::MissingName.to_string(), "name is required");
    assert_eq!(DraftError::MissingAmount.to_string(), "amount is required");
}

#[test]
fn test_field_access() {
    let mut d = Draft::default();
    assert!(d.is_blank());
    d.get_mut(Field::Category).push_str("Food");
    assert_eq!(d.get(Field::Category), "Food");
    assert_eq!(d.category, "Food");
    assert!(!d.is_blank());
}

// ── Field ─────────────────────────────────────────────────────

#[test]
fn test_field_cycle_visits_every_field() {
    let mut f = Field::default();
    for expected in Field::all() {
        assert_eq!(f, *expected);
        f = f.next();
    }
    assert_eq!(f, Field::Name);
}

#[test]
fn test_field_prev_inverts_next() {
    for f in Field::all() {
        assert_eq!(f.next().prev(), *f);
    }
}

#[test]
fn test_field_display() {
    assert_eq!(format!("{}", Field::Amount), "Amount");
    assert_eq!(Field::Date.placeholder(), "DD/MM/YYYY");
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_from_draft() {
    let d = Draft {
        category: "Housing".into(),
        date: "01/05/2024".into(),
        ..draft("Rent", "400")
    };
    let txn = Transaction::from_draft(TransactionId(1), &d);
    assert_eq!(txn.id(), TransactionId(1));
    assert_eq!(txn.name(), "Rent");
    assert_eq!(txn.amount(), "400");
    assert_eq!(txn.category(), "Housing");
    assert_eq!(txn.date(), "01/05/2024");
    assert_eq!(txn.value(), dec!(400));
}

#[test]
fn test_transaction_keeps_amount_text() {
    let txn = Transaction::from_draft(TransactionId(1), &draft("Tip", "3.50 cash"));
    assert_eq!(txn.amount(), "3.50 cash");
    assert_eq!(txn.value(), dec!(3.50));
}

#[test]
fn test_transaction_apply_keeps_id() {
    let mut txn = Transaction::from_draft(TransactionId(9), &draft("Coffee", "5"));
    txn.apply(&draft("Tea", "abc"));
    assert_eq!(txn.id(), TransactionId(9));
    assert_eq!(txn.name(), "Tea");
    assert_eq!(txn.value(), Decimal::ZERO);
}

#[test]
fn test_transaction_to_draft_roundtrip() {
    let d = Draft {
        category: "Food".into(),
        ..draft("Coffee", "5")
    };
    let txn = Transaction::from_draft(TransactionId(2), &d);
    assert_eq!(txn.to_draft(), d);
}

#[test]
fn test_transaction_id_display() {
    assert_eq!(TransactionId(42).to_string(), "#42");
}
