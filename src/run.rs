mod cli;
mod tui;

pub(crate) use cli::{print_usage, print_version};
pub(crate) use tui::as_tui;
