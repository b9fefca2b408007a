use anyhow::bail;
use credset_core::{style, validate};

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let set = global_args.load_credentials()?;
    let report = validate::validate(&set);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        style::print_report(&report);
    }

    if !report.is_fully_configured() {
        bail!(
            "{} credential(s) still carry placeholder values",
            report.num_unconfigured()
        );
    }
    Ok(())
}
