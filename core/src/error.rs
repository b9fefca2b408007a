use std::path::PathBuf;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown credential name '{name}'")]
    UnknownCredential { name: String },

    #[error("Duplicate credential name '{name}'")]
    DuplicateName { name: String },

    #[error(
        "Credential '{name}' is not configured (placeholder value in use). \
         Set {env_var} or run `credset configure`"
    )]
    MissingCredential { name: String, env_var: String },

    #[error("Invalid credentials TOML '{path}'")]
    InvalidCredFile {
        path: PathBuf,

        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid environment overrides: {0}")]
    Env(#[from] envy::Error),

    #[error(transparent)]
    File(#[from] fsutil::Error),
}
