use super::LineStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data. A missing key models a missing file.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<String, Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineStore for InMemoryStore {
    fn load(&self, name: &str) -> Result<Option<Vec<String>>> {
        Ok(self.files.get(name).cloned())
    }

    fn save(&mut self, name: &str, lines: &[String]) -> Result<()> {
        self.files.insert(name.to_string(), lines.to_vec());
        Ok(())
    }

    fn append(&mut self, name: &str, line: &str) -> Result<()> {
        self.files
            .entry(name.to_string())
            .or_default()
            .push(line.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Credential;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_file(mut self, name: &str, lines: &[&str]) -> Self {
            let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            self.store.save(name, &lines).unwrap();
            self
        }

        pub fn with_records(mut self, name: &str, count: usize) -> Self {
            let lines: Vec<String> = (1..=count).map(|i| format!("record {}", i)).collect();
            self.store.save(name, &lines).unwrap();
            self
        }

        pub fn with_user(mut self, users_file: &str, email: &str, password: &str) -> Self {
            let line = Credential::new(email, password).to_line().unwrap();
            self.store.append(users_file, &line).unwrap();
            self
        }
    }
}
