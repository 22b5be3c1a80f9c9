use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::{display_name, in_range, parse_index};

pub fn run<S: LineStore>(store: &mut S, name: &str, index: &str, text: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut lines) = store.load(name)? else {
        result.add_message(CmdMessage::info(format!(
            "No file found: {}",
            display_name(name)
        )));
        return Ok(result);
    };

    match parse_index(index).filter(|&i| in_range(i, lines.len())) {
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Record #{} not found.",
                index.trim()
            )));
        }
        Some(i) => {
            lines[i - 1] = text;
            store.save(name, &lines)?;
            result.add_message(CmdMessage::success(format!("Updated record #{}", i)));
        }
    }

    Ok(result)
}
