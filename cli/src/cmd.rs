pub mod check;
pub mod configure;
pub mod get;
pub mod init;
pub mod list;

use std::path::PathBuf;

use credset_core::{action, CredentialSet};

use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Credentials file to use (default: nearest 'credentials.toml' in
    /// ancestor dirs, then the user-level file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Ignore CREDSET_* environment overrides
    #[arg(long)]
    pub no_env: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    #[command(alias("c"))]
    Check(check::Args),

    Configure(configure::Args),
    Get(get::Args),
    Init(init::Args),

    #[command(alias("ls"))]
    List(list::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Check(args) => check::exec(args, self),
            Configure(args) => configure::exec(args, self),
            Get(args) => get::exec(args, self),
            Init(args) => init::exec(args, self),
            List(args) => list::exec(args, self),
        }
    }

    pub fn load_credentials(&self) -> anyhow::Result<CredentialSet> {
        let cfg = GlobalConfig::from_file_or_default();
        let file = cfg.resolve_for_read(self.file.as_deref(), &util::current_dir());
        action::load_credentials(file.as_deref(), !self.no_env)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ArgService {
    ThingSpeak,
    Blynk,
}

impl From<ArgService> for credset_core::Service {
    fn from(value: ArgService) -> Self {
        use credset_core::Service;
        use ArgService::*;
        match value {
            ThingSpeak => Service::ThingSpeak,
            Blynk => Service::Blynk,
        }
    }
}

impl From<&ArgService> for credset_core::Service {
    fn from(&value: &ArgService) -> Self {
        value.into()
    }
}
