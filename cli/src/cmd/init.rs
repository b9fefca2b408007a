use credset_core::{action, print_success};
use std::path::PathBuf;

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(default_value = "./")]
    dir: PathBuf,
}

pub fn exec(args: &Args, _: &GlobalArgs) -> SubcmdResult {
    let path = action::init_credentials_file(&args.dir)?;
    print_success!(
        "Created a credentials template with placeholders. (path: {})",
        path.to_string_lossy()
    );
    println!("Substitute your real values with `credset configure` before use.");
    Ok(())
}
