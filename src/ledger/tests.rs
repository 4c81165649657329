#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

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

fn ids(txns: &[Transaction]) -> Vec<TransactionId> {
    txns.iter().map(Transaction::id).collect()
}

// ── Expenses ──────────────────────────────────────────────────

#[test]
fn test_add_expense_appends_one() {
    let mut ledger = Ledger::new();
    let id = ledger.add_expense(&draft("Rent", "400")).unwrap();
    assert_eq!(ledger.expenses().len(), 1);
    assert_eq!(ledger.expenses()[0].id(), id);
    assert_eq!(ledger.expenses()[0].name(), "Rent");
    assert!(ledger.incomes().is_empty());
}

#[test]
fn test_add_expense_ids_unique() {
    let mut ledger = Ledger::new();
    for i in 0..200 {
        let before = ledger.expenses().len();
        let id = ledger
            .add_expense(&draft(&format!("Item {i}"), "1"))
            .unwrap();
        assert_eq!(ledger.expenses().len(), before + 1);
        assert_eq!(ledger.expenses().iter().filter(|t| t.id() == id).count(), 1);
    }
    let unique: HashSet<_> = ids(ledger.expenses()).into_iter().collect();
    assert_eq!(unique.len(), 200);
}

#[test]
fn test_ids_strictly_increase_across_collections() {
    let mut ledger = Ledger::new();
    let a = ledger.add_expense(&draft("A", "1")).unwrap();
    let b = ledger.add_income(&draft("B", "1")).unwrap();
    let c = ledger.add_expense(&draft("C", "1")).unwrap();
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_add_expense_preserves_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.add_expense(&draft("First", "1")).unwrap();
    ledger.add_expense(&draft("Second", "2")).unwrap();
    ledger.add_expense(&draft("Third", "3")).unwrap();
    let names: Vec<&str> = ledger.expenses().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[test]
fn test_add_expense_rejects_missing_fields() {
    let mut ledger = Ledger::new();
    assert_eq!(
        ledger.add_expense(&draft("", "10")),
        Err(DraftError::MissingName)
    );
    assert_eq!(
        ledger.add_expense(&draft("X", "")),
        Err(DraftError::MissingAmount)
    );
    assert!(ledger.expenses().is_empty());
}

#[test]
fn test_update_expense_replaces_fields_in_place() {
    let mut ledger = Ledger::new();
    let first = ledger.add_expense(&draft("Coffee", "5")).unwrap();
    let second = ledger.add_expense(&draft("Lunch", "12")).unwrap();

    let replacement = Draft {
        category: "Food".into(),
        date: "02/03/2024".into(),
        ..draft("Brunch", "15")
    };
    assert!(ledger.update_expense(first, &replacement).unwrap());

    assert_eq!(ledger.expenses().len(), 2);
    assert_eq!(ids(ledger.expenses()), vec![first, second]);
    let updated = ledger.expense(first).unwrap();
    assert_eq!(updated.name(), "Brunch");
    assert_eq!(updated.amount(), "15");
    assert_eq!(updated.category(), "Food");
    assert_eq!(updated.date(), "02/03/2024");
    assert_eq!(ledger.total_expenses(), dec!(27));
}

#[test]
fn test_update_expense_unknown_id_is_noop() {
    let mut ledger = Ledger::new();
    let id = ledger.add_expense(&draft("Coffee", "5")).unwrap();
    let before = ledger.expenses().to_vec();
    let found = ledger
        .update_expense(TransactionId(id.0 + 1000), &draft("Tea", "3"))
        .unwrap();
    assert!(!found);
    assert_eq!(ledger.expenses(), before.as_slice());
}

#[test]
fn test_update_expense_rejects_missing_fields() {
    let mut ledger = Ledger::new();
    let id = ledger.add_expense(&draft("Coffee", "5")).unwrap();
    assert_eq!(
        ledger.update_expense(id, &draft("", "7")),
        Err(DraftError::MissingName)
    );
    assert_eq!(ledger.expense(id).unwrap().name(), "Coffee");
    assert_eq!(ledger.expense(id).unwrap().amount(), "5");
}

#[test]
fn test_update_cannot_touch_incomes() {
    let mut ledger = Ledger::new();
    let income = ledger.add_income(&draft("Salary", "1000")).unwrap();
    assert!(!ledger.update_expense(income, &draft("Bonus", "5")).unwrap());
    assert_eq!(ledger.incomes()[0].name(), "Salary");
}

#[test]
fn test_delete_expense_removes_exactly_one() {
    let mut ledger = Ledger::new();
    let a = ledger.add_expense(&draft("A", "1")).unwrap();
    let b = ledger.add_expense(&draft("B", "2")).unwrap();
    let c = ledger.add_expense(&draft("C", "3")).unwrap();

    assert!(ledger.delete_expense(b));
    assert_eq!(ids(ledger.expenses()), vec![a, c]);
    assert!(ledger.expense(b).is_none());
}

#[test]
fn test_delete_expense_unknown_id_is_noop() {
    let mut ledger = Ledger::new();
    let a = ledger.add_expense(&draft("A", "1")).unwrap();
    assert!(ledger.delete_expense(a));
    assert!(!ledger.delete_expense(a));
    assert!(!ledger.delete_expense(TransactionId(-1)));
    assert!(ledger.expenses().is_empty());
}

#[test]
fn test_delete_cannot_touch_incomes() {
    let mut ledger = Ledger::new();
    let income = ledger.add_income(&draft("Salary", "1000")).unwrap();
    assert!(!ledger.delete_expense(income));
    assert_eq!(ledger.incomes().len(), 1);
}

// ── Incomes ───────────────────────────────────────────────────

#[test]
fn test_add_income_appends() {
    let mut ledger = Ledger::new();
    let id = ledger.add_income(&draft("Salary", "1000")).unwrap();
    assert_eq!(ids(ledger.incomes()), vec![id]);
    assert!(ledger.expenses().is_empty());
}

#[test]
fn test_add_income_rejects_missing_fields() {
    let mut ledger = Ledger::new();
    assert!(ledger.add_income(&draft("", "10")).is_err());
    assert!(ledger.add_income(&draft("Salary", "")).is_err());
    assert!(ledger.incomes().is_empty());
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_empty_ledger_totals() {
    let ledger = Ledger::new();
    assert_eq!(ledger.total_incomes(), Decimal::ZERO);
    assert_eq!(ledger.total_expenses(), Decimal::ZERO);
    assert_eq!(ledger.balance(), Decimal::ZERO);
}

#[test]
fn test_salary_and_rent_balance() {
    let mut ledger = Ledger::new();
    ledger.add_income(&draft("Salary", "1000")).unwrap();
    ledger.add_expense(&draft("Rent", "400")).unwrap();
    assert_eq!(ledger.total_incomes(), dec!(1000));
    assert_eq!(ledger.total_expenses(), dec!(400));
    assert_eq!(ledger.balance(), dec!(600));
}

#[test]
fn test_non_numeric_amounts_count_as_zero() {
    let mut ledger = Ledger::new();
    ledger.add_income(&draft("Salary", "1000")).unwrap();
    ledger.add_income(&draft("Gift", "lots")).unwrap();
    ledger.add_expense(&draft("Rent", "400")).unwrap();
    ledger.add_expense(&draft("Mystery", "n/a")).unwrap();
    assert_eq!(ledger.total_incomes(), dec!(1000));
    assert_eq!(ledger.total_expenses(), dec!(400));
    assert_eq!(ledger.balance(), dec!(600));
}

#[test]
fn test_balance_matches_totals_over_mixed_sequence() {
    let mut ledger = Ledger::new();
    let amounts = ["10.25", "x", "3", "-2", "0.1", "7abc", "", "100"];
    for (i, amount) in amounts.iter().enumerate() {
        let d = draft("Entry", amount);
        if i % 2 == 0 {
            let _ = ledger.add_income(&d);
        } else {
            let _ = ledger.add_expense(&d);
        }
        assert_eq!(
            ledger.balance(),
            ledger.total_incomes() - ledger.total_expenses()
        );
    }
    assert_eq!(ledger.total_incomes(), dec!(13.35));
    assert_eq!(ledger.total_expenses(), dec!(105));
    assert_eq!(ledger.balance(), dec!(-91.65));
}

#[test]
fn test_decimal_sums_are_exact() {
    let mut ledger = Ledger::new();
    for _ in 0..10 {
        ledger.add_expense(&draft("Dime", "0.1")).unwrap();
    }
    assert_eq!(ledger.total_expenses(), dec!(1.0));
}

#[test]
fn test_negative_balance() {
    let mut ledger = Ledger::new();
    ledger.add_income(&draft("Salary", "100")).unwrap();
    ledger.add_expense(&draft("Car", "250.50")).unwrap();
    assert_eq!(ledger.balance(), dec!(-150.50));
}

#[test]
fn test_totals_follow_update_and_delete() {
    let mut ledger = Ledger::new();
    let id = ledger.add_expense(&draft("Coffee", "5")).unwrap();
    ledger.add_expense(&draft("Lunch", "12")).unwrap();
    ledger.update_expense(id, &draft("Coffee", "7")).unwrap();
    assert_eq!(ledger.total_expenses(), dec!(19));
    ledger.delete_expense(id);
    assert_eq!(ledger.total_expenses(), dec!(12));
}

// ── Snapshot ──────────────────────────────────────────────────

#[test]
fn test_snapshot_reflects_state() {
    let mut ledger = Ledger::new();
    ledger.add_income(&draft("Salary", "1000")).unwrap();
    ledger.add_expense(&draft("Rent", "400")).unwrap();

    let snap = ledger.snapshot();
    assert_eq!(snap.expenses.len(), 1);
    assert_eq!(snap.incomes.len(), 1);
    assert_eq!(
        snap.summary,
        Summary {
            total_incomes: dec!(1000),
            total_expenses: dec!(400),
            balance: dec!(600),
        }
    );
}

// ── Bounds ────────────────────────────────────────────────────

const MAX_AMOUNT: &str = "79228162514264337593543950335";

#[test]
fn test_totals_saturate_instead_of_overflowing() {
    let mut ledger = Ledger::new();
    ledger.add_expense(&draft("Yacht", MAX_AMOUNT)).unwrap();
    ledger.add_expense(&draft("Island", MAX_AMOUNT)).unwrap();
    assert_eq!(ledger.total_expenses(), Decimal::MAX);
    assert_eq!(ledger.balance(), Decimal::MIN);

    ledger.add_income(&draft("Lottery", MAX_AMOUNT)).unwrap();
    ledger.add_income(&draft("Lottery", MAX_AMOUNT)).unwrap();
    assert_eq!(ledger.total_incomes(), Decimal::MAX);
    assert_eq!(ledger.balance(), Decimal::ZERO);
}

#[test]
fn test_balance_saturates_with_negative_expense() {
    let mut ledger = Ledger::new();
    ledger.add_income(&draft("Lottery", MAX_AMOUNT)).unwrap();
    ledger.add_expense(&draft("Refund", "-5")).unwrap();
    assert_eq!(ledger.balance(), Decimal::MAX);

    let snap = ledger.snapshot();
    assert_eq!(snap.summary.total_expenses, dec!(-5));
    assert_eq!(snap.summary.balance, Decimal::MAX);
}
