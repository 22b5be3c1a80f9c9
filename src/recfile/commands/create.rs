use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LineStore;

pub fn run<S: LineStore>(store: &mut S, name: &str, text: String) -> Result<CmdResult> {
    // A missing file is the empty sequence here; the file comes into
    // existence on the save.
    let mut lines = store.load(name)?.unwrap_or_default();
    lines.push(text);
    store.save(name, &lines)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created record #{}",
        lines.len()
    )));
    Ok(result)
}
