use crate::db::log::LogRow;
use crate::models::login_entry::LoginEntry;
use ansi_term::Colour;
use chrono::{DateTime, Local};

const OP_TARGET_MAX: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Red,
        "register" => Colour::Yellow,
        "seed" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal operation log, one row per line.
    pub fn print_log(rows: &[LogRow]) {
        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return;
        }

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);

        let lines: Vec<(String, String)> = rows
            .iter()
            .map(|r| {
                let date = DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());
                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                (date, truncate(&op_target, OP_TARGET_MAX))
            })
            .collect();

        let date_w = lines.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = lines.iter().map(|(_, o)| o.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, (date, op_target)) in rows.iter().zip(lines) {
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));

            // only the operation word is coloured
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&row.operation).paint(op), rest)
                }
                None => color_for_operation(&row.operation)
                    .paint(op_target.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    /// Print the login audit log as `N. user - date`.
    pub fn print_logins(entries: &[LoginEntry]) {
        println!("=== LOGIN LOG ===");
        println!("Total logins: {}", entries.len());

        for (i, e) in entries.iter().enumerate() {
            let when = DateTime::parse_from_rfc3339(&e.data_login)
                .map(|dt| {
                    dt.with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string()
                })
                .unwrap_or_else(|_| e.data_login.clone());
            println!("{}. {} - {}", i + 1, e.usuario, when);
        }
    }
}
