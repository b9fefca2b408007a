use clap::Parser;
use credset_cli::cmd::GlobalArgs;

fn main() {
    env_logger::init();

    let app = GlobalArgs::parse();
    app.exec_subcmd().unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    });
}
