use super::{CatalogFile, SnapshotStore};
use crate::error::Result;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Snapshot files under a root directory. Absolute names bypass the root.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a snapshot name resolves to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

fn write_snapshot(path: &Path, file: &CatalogFile) -> Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, file)?;
    writer.flush()?;
    Ok(())
}

impl SnapshotStore for FileStore {
    fn save(&self, name: &str, file: &CatalogFile) -> Result<()> {
        let target = self.path_for(name);
        let dir = target.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("catalog");

        // Atomic write
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        let written = write_snapshot(&tmp_path, file)
            .and_then(|()| fs::rename(&tmp_path, &target).map_err(Into::into));
        if written.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        written?;

        info!(path = %target.display(), items = file.items.len(), "catalog saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<CatalogFile> {
        let path = self.path_for(name);
        let file: CatalogFile = {
            let reader = BufReader::new(fs::File::open(&path)?);
            serde_json::from_reader(reader)?
        };
        file.validate()?;

        info!(path = %path.display(), items = file.items.len(), "catalog loaded");
        Ok(file)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }
}
