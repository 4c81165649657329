use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Field;
use crate::ui::app::{App, InputMode, Pane};
use crate::ui::theme;
use crate::ui::util::truncate;

const LABEL_WIDTH: u16 = 10;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.pane == Pane::Form;
    let title = match app.form.editing_id() {
        Some(id) => {
            let label = match app.ledger.expense(id) {
                Some(txn) => format!(" Editing '{}' ", truncate(txn.name(), 24)),
                None => format!(" Editing removed expense {id} "),
            };
            Span::styled(label, theme::editing_style())
        }
        None => Span::styled(" New entry ", theme::title_style()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(title);
    let inner = block.inner(area);

    let mut lines = vec![Line::from("")];
    for field in Field::all() {
        let active = focused && *field == app.field;
        let value = app.form.field(*field);
        let label_style = if active {
            theme::selected_style()
        } else {
            theme::dim_style()
        };
        let label = format!(" {:<width$}", field.label(), width = LABEL_WIDTH as usize - 1);
        let value_span = if value.is_empty() {
            Span::styled(format!(" {}", field.placeholder()), theme::dim_style())
        } else {
            Span::styled(format!(" {value}"), theme::normal_style())
        };
        lines.push(Line::from(vec![Span::styled(label, label_style), value_span]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" S ", theme::expense_style()),
        Span::styled("save expense   ", theme::dim_style()),
        Span::styled("I ", theme::income_style()),
        Span::styled("save income", theme::dim_style()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" i ", theme::normal_style()),
        Span::styled("type   ", theme::dim_style()),
        Span::styled("Esc ", theme::normal_style()),
        Span::styled(
            if app.form.editing_id().is_some() {
                "cancel edit"
            } else {
                "clear"
            },
            theme::dim_style(),
        ),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);

    if app.input_mode == InputMode::Insert {
        let row = Field::all()
            .iter()
            .position(|field| *field == app.field)
            .unwrap_or(0);
        let typed = app.form.field(app.field).chars().count();
        if let Some(pos) = cursor_position(inner, row, typed) {
            f.set_cursor_position(pos);
        }
    }
}

/// Cursor cell after the typed text of field `row`, pinned to the last column.
fn cursor_position(inner: Rect, row: usize, typed: usize) -> Option<(u16, u16)> {
    let typed = u16::try_from(typed).unwrap_or(u16::MAX);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(LABEL_WIDTH + 1)
        .saturating_add(typed)
        .min(inner.right().saturating_sub(1));
    let y = inner.y.saturating_add(1).saturating_add(row.saturating_mul(2));
    (y < inner.bottom()).then_some((x, y))
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
