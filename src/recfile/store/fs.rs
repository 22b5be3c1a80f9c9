use super::LineStore;
use crate::error::{RecfileError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if Path::new(name).is_absolute() {
            return Err(RecfileError::Store(format!(
                "File name must be relative to the data directory: {}",
                name
            )));
        }
        Ok(self.base_dir.join(name))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RecfileError::Io)?;
            }
        }
        Ok(())
    }
}

impl LineStore for FileStore {
    fn load(&self, name: &str) -> Result<Option<Vec<String>>> {
        let path = self.resolve(name)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(RecfileError::Io)?;
        // Trim surrounds the whole file, not individual lines; a
        // whitespace-only file loads as empty.
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Some(Vec::new()));
        }
        Ok(Some(trimmed.split('\n').map(str::to_string).collect()))
    }

    fn save(&mut self, name: &str, lines: &[String]) -> Result<()> {
        let path = self.resolve(name)?;
        self.ensure_dir(&path)?;
        fs::write(path, lines.join("\n")).map_err(RecfileError::Io)?;
        Ok(())
    }

    fn append(&mut self, name: &str, line: &str) -> Result<()> {
        let path = self.resolve(name)?;
        self.ensure_dir(&path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(RecfileError::Io)?;
        writeln!(file, "{}", line).map_err(RecfileError::Io)?;
        Ok(())
    }
}
