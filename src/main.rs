use std::path::PathBuf;

use checkelf::objdump::Config;
use checkelf::report::Printer;
use clap::Parser;

/// Finds cross-calls between `.text` and `.init.text` in an ELF file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// ELF filename
    elf: PathBuf,

    /// Binutils prefix
    #[arg(long, default_value = "")]
    tools_prefix: String,

    /// Verbose mode
    #[arg(long)]
    verbose: bool,

    /// Demangle symbols
    #[arg(short, long)]
    demangle: bool,

    /// Color the finding tags
    #[arg(long)]
    color: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            elf: args.elf,
            tools_prefix: args.tools_prefix,
            verbose: args.verbose,
            demangle: args.demangle,
            color: args.color,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Args::parse());
    match checkelf::analyze(&config) {
        Ok(findings) => Printer::new(config.demangle, config.color).print(&findings),
        Err(e) => {
            eprintln!("checkelf: {e}");
            std::process::exit(1);
        }
    }
}
