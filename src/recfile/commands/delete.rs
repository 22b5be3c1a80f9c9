use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::{display_name, in_range, parse_index};

pub fn run<S: LineStore>(store: &mut S, name: &str, index: &str) -> Result<CmdResult> {
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
            lines.remove(i - 1);
            store.save(name, &lines)?;
            result.add_message(CmdMessage::success(format!("Deleted record #{}", i)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, read};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removal_shifts_later_records_down() {
        let fixture = StoreFixture::new().with_file("notes.txt", &["a", "b", "c"]);
        let mut store = fixture.store;
        let result = run(&mut store, "notes.txt", "2").unwrap();
        assert_eq!(result.messages[0].content, "Deleted record #2");

        let records = read::run(&store, "notes.txt").unwrap().records;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "a");
        assert_eq!(records[1].index, 2);
        assert_eq!(records[1].text, "c");
    }

    #[test]
    fn deleting_the_last_record_leaves_an_empty_file() {
        let fixture = StoreFixture::new().with_file("notes.txt", &["only"]);
        let mut store = fixture.store;
        run(&mut store, "notes.txt", "1").unwrap();

        let result = list::run(&store, "notes.txt").unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages[0].content, "File is empty.");
    }

    #[test]
    fn reports_missing_file() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "notes.txt", "1").unwrap();
        assert_eq!(result.messages[0].content, "No file found: notes.txt");
    }

    #[test]
    fn bad_index_leaves_file_unmodified() {
        for bad in ["0", "2", "nope"] {
            let fixture = StoreFixture::new().with_file("notes.txt", &["a"]);
            let mut store = fixture.store;
            let result = run(&mut store, "notes.txt", bad).unwrap();
            assert_eq!(
                result.messages[0].content,
                format!("Record #{} not found.", bad)
            );
            assert_eq!(read::run(&store, "notes.txt").unwrap().records.len(), 1);
        }
    }
}
