use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::{display_name, number_lines};

pub fn run<S: LineStore>(store: &S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.load(name)? {
        None => result.add_message(CmdMessage::info(format!(
            "No file found: {}",
            display_name(name)
        ))),
        Some(lines) if lines.is_empty() => {
            result.add_message(CmdMessage::info("File is empty."));
        }
        Some(lines) => {
            let records = number_lines(lines);
            let total = records.len();
            result = result.with_records(records).with_total(total);
        }
    }

    Ok(result)
}
