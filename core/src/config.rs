use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{PLACEHOLDER_CHANNEL, PLACEHOLDER_TOKEN};

/// The credentials definition file, one table per cloud service.
///
/// Unknown sections or fields are rejected: the set of credential names
/// is closed and fixed at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredFile {
    #[serde(skip)]
    pub source_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thingspeak: Option<ThingSpeakSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blynk: Option<BlynkSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThingSpeakSection {
    #[serde(default = "ThingSpeakSection::default_token")]
    pub token: String,

    #[serde(default = "ThingSpeakSection::default_channel")]
    pub channel: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlynkSection {
    #[serde(default = "BlynkSection::default_token")]
    pub token: String,
}

impl ThingSpeakSection {
    fn default_token() -> String {
        PLACEHOLDER_TOKEN.to_owned()
    }

    fn default_channel() -> u64 {
        PLACEHOLDER_CHANNEL
    }
}

impl Default for ThingSpeakSection {
    fn default() -> Self {
        Self {
            token: Self::default_token(),
            channel: Self::default_channel(),
        }
    }
}

impl BlynkSection {
    fn default_token() -> String {
        PLACEHOLDER_TOKEN.to_owned()
    }
}

impl Default for BlynkSection {
    fn default() -> Self {
        Self {
            token: Self::default_token(),
        }
    }
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

impl CredFile {
    pub const FILENAME: &str = "credentials.toml";

    /// The shareable template: every section present, every value a
    /// placeholder.
    pub fn placeholder() -> Self {
        Self {
            source_file: None,
            thingspeak: Some(ThingSpeakSection::default()),
            blynk: Some(BlynkSection::default()),
        }
    }

    pub fn example_toml() -> String {
        let file = Asset::get(Self::FILENAME).unwrap();
        std::str::from_utf8(file.data.as_ref()).unwrap().to_owned()
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: impl Into<PathBuf>) -> Result<Self> {
        let filepath = filepath.into();
        let toml = fsutil::read_to_string(&filepath)?;
        let mut file = Self::from_toml(&toml).map_err(|e| Error::InvalidCredFile {
            path: filepath.clone(),
            source: e,
        })?;
        file.source_file = Some(filepath);
        Ok(file)
    }

    /// Find a credentials file in ancestor dirs, including `cur_dir` itself.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> Option<PathBuf> {
        cur_dir
            .as_ref()
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
    }
}
