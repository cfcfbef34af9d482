// src/store.rs

//! Write-once cache of raw pages, one directory per date. The key-to-path
//! mapping is a pure function of the key, so repeated runs address the
//! same files and never re-fetch what is already on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::sanitize::file_name_from_url;
use crate::error::{Error, Result};
use crate::params;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Day schedule page, keyed by date alone.
    Schedule,
    /// Play-by-play page, keyed by date + home-team code.
    Game { home: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheKey {
    pub date: NaiveDate,
    pub resource: Resource,
}

impl CacheKey {
    pub fn schedule(date: NaiveDate) -> Self {
        Self {
            date,
            resource: Resource::Schedule,
        }
    }

    pub fn game(date: NaiveDate, home: &str) -> Self {
        Self {
            date,
            resource: Resource::Game { home: s!(home) },
        }
    }

    /// Source URL this key caches.
    pub fn url(&self) -> String {
        match &self.resource {
            Resource::Schedule => params::schedule_url(self.date),
            Resource::Game { home } => params::game_url(self.date, home),
        }
    }

    fn file_name(&self) -> String {
        file_name_from_url(&self.url())
    }
}

pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(key.date.format("%Y-%m-%d").to_string())
            .join(key.file_name())
    }

    pub fn exists(&self, key: &CacheKey) -> bool {
        self.path(key).is_file()
    }

    pub fn read(&self, key: &CacheKey) -> Result<String> {
        let path = self.path(key);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::CacheMiss(path),
            _ => Error::Io(e),
        })
    }

    /// Creates the date directory on first write. Refuses to overwrite an
    /// existing entry; callers gate writes with `exists`.
    pub fn write(&self, key: &CacheKey, content: &str) -> Result<()> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            ensure_directory(parent)?;
        }
        if path.exists() {
            return Err(Error::CacheConflict(path));
        }
        fs::write(&path, content)?;
        Ok(())
    }
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
