use recfile::error::RecfileError;
use recfile::store::fs::FileStore;
use recfile::store::LineStore;
use std::fs;
use tempfile::TempDir;

fn store(temp: &TempDir) -> FileStore {
    FileStore::new(temp.path().to_path_buf())
}

#[test]
fn load_distinguishes_missing_from_empty() {
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    assert!(store.load("notes.txt").unwrap().is_none());

    fs::write(temp.path().join("notes.txt"), "").unwrap();
    assert_eq!(store.load("notes.txt").unwrap(), Some(Vec::new()));
}

#[test]
fn whitespace_only_file_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    fs::write(temp.path().join("notes.txt"), "\n  \n").unwrap();
    assert_eq!(store.load("notes.txt").unwrap(), Some(Vec::new()));
}

#[test]
fn load_preserves_line_order_and_content() {
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    fs::write(temp.path().join("notes.txt"), "first\n  indented\nthird\n").unwrap();
    let lines = store.load("notes.txt").unwrap().unwrap();
    // Only the surrounding whitespace of the whole file is trimmed;
    // individual lines keep theirs.
    assert_eq!(lines, ["first", "  indented", "third"]);
}

#[test]
fn save_joins_without_trailing_newline() {
    let temp = TempDir::new().unwrap();
    let mut store = store(&temp);

    store
        .save("notes.txt", &["a".to_string(), "b".to_string()])
        .unwrap();
    let on_disk = fs::read_to_string(temp.path().join("notes.txt")).unwrap();
    assert_eq!(on_disk, "a\nb");
}

#[test]
fn save_overwrites_the_whole_file() {
    let temp = TempDir::new().unwrap();
    let mut store = store(&temp);

    store
        .save("notes.txt", &["a".to_string(), "b".to_string(), "c".to_string()])
        .unwrap();
    store.save("notes.txt", &["only".to_string()]).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
        "only"
    );
}

#[test]
fn save_creates_the_base_directory() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().join("nested").join("data"));

    store.save("notes.txt", &["a".to_string()]).unwrap();
    assert!(temp.path().join("nested/data/notes.txt").exists());
}

#[test]
fn append_creates_and_extends_with_newlines() {
    let temp = TempDir::new().unwrap();
    let mut store = store(&temp);

    store.append("users.txt", "one").unwrap();
    store.append("users.txt", "two").unwrap();

    let on_disk = fs::read_to_string(temp.path().join("users.txt")).unwrap();
    assert_eq!(on_disk, "one\ntwo\n");

    // The trailing newline from appends disappears on load.
    let lines = store.load("users.txt").unwrap().unwrap();
    assert_eq!(lines, ["one", "two"]);
}

#[test]
fn absolute_file_names_are_rejected() {
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    let err = store.load("/etc/passwd").unwrap_err();
    assert!(matches!(err, RecfileError::Store(_)));
}
