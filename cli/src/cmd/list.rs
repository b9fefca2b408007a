use credset_core::style;

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Emit entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Print secret tokens unmasked
    #[arg(long)]
    pub reveal: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let set = global_args.load_credentials()?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&style::entries_json(&set, args.reveal))?
        );
    } else {
        style::print_entries(&set, args.reveal);
    }
    Ok(())
}
