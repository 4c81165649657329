use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Transaction, TransactionId};
use crate::ui::app::{App, Pane};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

struct ListView<'a> {
    title: &'static str,
    empty_hint: &'static str,
    txns: &'a [Transaction],
    cursor: usize,
    scroll: usize,
    focused: bool,
    editing: Option<TransactionId>,
    amount_style: Style,
}

pub(crate) fn render_expenses(f: &mut Frame, area: Rect, app: &App) {
    render_list(
        f,
        area,
        ListView {
            title: "Expenses",
            empty_hint: "Fill in the form and press S to record an expense",
            txns: app.ledger.expenses(),
            cursor: app.expense_index,
            scroll: app.expense_scroll,
            focused: app.pane == Pane::Expenses,
            editing: app.form.editing_id(),
            amount_style: theme::expense_style(),
        },
    );
}

pub(crate) fn render_incomes(f: &mut Frame, area: Rect, app: &App) {
    render_list(
        f,
        area,
        ListView {
            title: "Incomes",
            empty_hint: "Fill in the form and press I to record an income",
            txns: app.ledger.incomes(),
            cursor: app.income_index,
            scroll: app.income_scroll,
            focused: app.pane == Pane::Incomes,
            editing: None,
            amount_style: theme::income_style(),
        },
    );
}

fn render_list(f: &mut Frame, area: Rect, view: ListView<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(view.focused))
        .title(Span::styled(
            format!(" {} ({}) ", view.title, view.txns.len()),
            theme::title_style(),
        ));

    if view.txns.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(view.empty_hint, theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Name", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = view
        .txns
        .iter()
        .enumerate()
        .skip(view.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let is_cursor = view.focused && i == view.cursor;
            let is_editing = view.editing == Some(txn.id());

            let date_cell = if is_editing {
                format!("\u{270e} {}", txn.date())
            } else {
                format!("  {}", txn.date())
            };
            let category = if txn.category().is_empty() {
                "\u{2014}"
            } else {
                txn.category()
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if is_editing {
                theme::editing_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(date_cell),
                Cell::from(truncate(txn.name(), 32)),
                Cell::from(truncate(category, 16)),
                Cell::from(Span::styled(format_amount(txn.value()), view.amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(12),
        Constraint::Length(16),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
