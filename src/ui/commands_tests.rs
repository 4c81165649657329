#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Field;
use crate::settings::Settings;

fn app_with_draft(name: &str, amount: &str) -> App {
    let mut app = App::new(&Settings::default());
    *app.form.field_mut(Field::Name) = name.into();
    *app.form.field_mut(Field::Amount) = amount.into();
    app
}

#[test]
fn test_quit() {
    let mut app = app_with_draft("", "");
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_expense_and_income_commands() {
    let mut app = app_with_draft("Rent", "400");
    handle_command("expense", &mut app).unwrap();
    assert_eq!(app.ledger.expenses().len(), 1);

    *app.form.field_mut(Field::Name) = "Salary".into();
    *app.form.field_mut(Field::Amount) = "1000".into();
    handle_command(" in ", &mut app).unwrap();
    assert_eq!(app.ledger.incomes().len(), 1);
    assert_eq!(app.ledger.balance().to_string(), "600");
}

#[test]
fn test_edit_then_reset() {
    let mut app = app_with_draft("Coffee", "5");
    handle_command("x", &mut app).unwrap();
    handle_command("edit", &mut app).unwrap();
    assert!(app.form.editing_id().is_some());
    handle_command("clear", &mut app).unwrap();
    assert!(app.form.editing_id().is_none());
}

#[test]
fn test_delete_asks_first() {
    let mut app = app_with_draft("Coffee", "5");
    handle_command("x", &mut app).unwrap();
    handle_command("delete", &mut app).unwrap();
    assert!(app.pending_action.is_some());
    assert_eq!(app.ledger.expenses().len(), 1);
}

#[test]
fn test_help() {
    let mut app = app_with_draft("", "");
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
}

#[test]
fn test_empty_input_is_ignored() {
    let mut app = app_with_draft("", "");
    handle_command("   ", &mut app).unwrap();
    assert!(app.status_message.is_empty());
    assert!(app.running);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let mut app = app_with_draft("", "");
    handle_command("expens", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :expens. Did you mean :expense?"
    );
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("income", "income"), 0);
    assert_eq!(levenshtein("delte", "delete"), 1);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), "{name} has no description");
    }
}
