use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Qualified credential name, e.g. "thingspeak.token"
    #[arg()] // positional argument
    pub name: String,

    /// Print the value even if it is still the documented placeholder
    #[arg(long)]
    pub allow_placeholder: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let set = global_args.load_credentials()?;

    let value = if args.allow_placeholder {
        set.resolve(&args.name)?
    } else {
        set.require(&args.name)?
    };
    println!("{}", value);
    Ok(())
}
