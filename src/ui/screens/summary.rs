use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ledger::Snapshot;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = snapshot.summary;
    let income_count = snapshot.incomes.len();
    let expense_count = snapshot.expenses.len();

    render_card(
        f,
        cards[0],
        "Income",
        summary.total_incomes,
        theme::GREEN,
        format!("{income_count} {}", entries(income_count)),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        summary.total_expenses,
        theme::RED,
        format!("{expense_count} {}", entries(expense_count)),
    );
    render_card(
        f,
        cards[2],
        "Balance",
        summary.balance,
        balance_color(summary.balance),
        "income - expenses".to_string(),
    );
}

fn entries(n: usize) -> &'static str {
    if n == 1 {
        "entry"
    } else {
        "entries"
    }
}

fn balance_color(balance: Decimal) -> Color {
    if balance >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(false))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
