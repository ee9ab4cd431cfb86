use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_TARGET_WIDTH: usize = 48;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour by operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "edit" => Colour::Yellow,
        "justify" => Colour::Cyan,
        "approve" => Colour::Green,
        "reject" => Colour::Red,
        "holiday_add" | "employee_add" | "employee_edit" => Colour::Blue,
        "holiday_del" => Colour::Red,
        "recalc" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for LogEntry {
            id,
            date,
            operation,
            target,
            message,
        } in entries
        {
            let color = color_for_operation(&operation);

            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                colored.push_str(&format!(" ({target})"));
            }

            // truncate on the visible text, then recolour the operation only
            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > OP_TARGET_WIDTH {
                let mut s: String = visible.chars().take(OP_TARGET_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match shown.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(shown.as_str()).to_string(),
            };

            let padding =
                " ".repeat(OP_TARGET_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
