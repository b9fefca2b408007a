use std::collections::HashSet;

use anyhow::ensure;
use clap::ValueEnum as _;
use credset_core::{action, print_success, Service};

use super::{ArgService, GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub services: Vec<ArgService>,

    #[arg(short, long)]
    pub all: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    ensure!(
        !args.services.is_empty() || args.all,
        "Please specify <SERVICE> in argument (or you can use '--all')"
    );

    let services: Vec<ArgService> = if args.all {
        ArgService::value_variants().to_vec()
    } else {
        let mut seen = HashSet::new();
        let mut v = args.services.clone();
        v.retain(|&s| seen.insert(s));
        v
    };
    let services: Vec<Service> = services.into_iter().map(Into::into).collect();

    let cfg = GlobalConfig::from_file_or_default();
    let path = cfg.resolve_for_write(global_args.file.as_deref(), &util::current_dir());

    let path = action::configure(&path, &services)?;
    print_success!(
        "Substituted credentials for {} service(s). (path: {})",
        services.len(),
        util::replace_homedir_to_tilde(path).to_string_lossy()
    );
    Ok(())
}
