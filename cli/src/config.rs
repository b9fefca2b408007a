use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use credset_core::CredFile;

use crate::util;

pub const APP_NAME: &str = "credset";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "GlobalConfig::default_credentials_file")]
    pub credentials_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            credentials_file: Self::default_credentials_file(),
        }
    }
}

impl GlobalConfig {
    pub const FILENAME: &str = "credset.toml";

    pub fn filepath() -> PathBuf {
        let dir = dirs::config_dir().expect("Failed to get user's config dir path");
        dir.join(APP_NAME).join(Self::FILENAME)
    }

    fn default_credentials_file() -> PathBuf {
        let dir = dirs::config_dir().expect("Failed to get user's config dir path");
        dir.join(APP_NAME).join(CredFile::FILENAME)
    }

    pub fn from_file_or_default() -> Self {
        let path = Self::filepath();
        let toml_str = match File::open(&path).and_then(io::read_to_string) {
            Ok(toml) => toml,
            _ => return GlobalConfig::default(),
        };
        toml::from_str(&toml_str).unwrap_or_else(|e| {
            log::error!(
                "Invalid config '{:?}': {:#}",
                util::replace_homedir_to_tilde(path),
                e
            );
            std::process::exit(1)
        })
    }

    /// Where to read credentials from, if anywhere: the explicit flag, else
    /// the nearest definition file in ancestor dirs, else the user-level
    /// file when it exists.
    pub fn resolve_for_read(&self, flag: Option<&Path>, cur_dir: &Path) -> Option<PathBuf> {
        if let Some(path) = flag {
            return Some(path.to_owned());
        }
        if let Some(path) = CredFile::find_file_in_ancestors(cur_dir) {
            return Some(path);
        }
        self.credentials_file
            .is_file()
            .then(|| self.credentials_file.clone())
    }

    /// Where `configure` writes: same resolution, but falls back to the
    /// user-level path even when that file does not exist yet.
    pub fn resolve_for_write(&self, flag: Option<&Path>, cur_dir: &Path) -> PathBuf {
        if let Some(path) = flag {
            return path.to_owned();
        }
        CredFile::find_file_in_ancestors(cur_dir)
            .unwrap_or_else(|| self.credentials_file.clone())
    }
}
