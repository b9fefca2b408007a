use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CredFile;
use crate::env::EnvOverrides;
use crate::interactive;
use crate::model::Service;
use crate::set::CredentialSet;

/// Write the placeholder template into `dir`.
/// Never overwrites: a populated file must not be clobbered.
pub fn init_credentials_file(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(CredFile::FILENAME);
    fsutil::write_new(&path, CredFile::example_toml())
        .context("Failed to write credentials template")?;
    Ok(path)
}

/// Load the definition set. Merge precedence: placeholder defaults, then
/// the credentials file, then `CREDSET_*` environment variables.
pub fn load_credentials(file: Option<&Path>, use_env: bool) -> Result<CredentialSet> {
    let cred_file = match file {
        Some(path) => {
            let f = CredFile::from_toml_file(path)
                .with_context(|| format!("Failed to load credentials from '{}'", path.display()))?;
            log::debug!("Using credentials file '{}'", path.display());
            Some(f)
        }
        None => None,
    };

    let env = if use_env {
        let overrides =
            EnvOverrides::from_env().context("Invalid CREDSET_* environment variable")?;
        if !overrides.is_empty() {
            log::debug!("Applying CREDSET_* environment overrides");
        }
        Some(overrides)
    } else {
        None
    };

    Ok(CredentialSet::merged(cred_file.as_ref(), env.as_ref()))
}

/// Interactively substitute real values for `services`, then write `path`.
pub fn configure(path: impl AsRef<Path>, services: &[Service]) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut file = if path.is_file() {
        CredFile::from_toml_file(path)?
    } else {
        CredFile::placeholder()
    };

    for &service in services {
        interactive::ask_service(service, &mut file)
            .with_context(|| format!("Failed to read credentials for {}", service))?;
    }

    let toml = toml::to_string_pretty(&file).context("Failed to serialize credentials")?;
    fsutil::write_with_mkdir(path, &toml)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path.to_owned())
}
