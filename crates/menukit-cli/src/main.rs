//! menukit demonstration client entry point.

use clap::Parser;
use menukit_cli::demo;
use menukit_core::Orientation;

/// Interactive numbered-menu demonstration over stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "menukit")]
#[command(about = "Interactive demonstration of the menukit navigation engine")]
#[command(version)]
struct Args {
    /// Lay menu options out on one tab-separated line instead of one per line
    #[arg(long)]
    horizontal: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let orientation =
        if args.horizontal { Orientation::Horizontal } else { Orientation::Vertical };
    demo::run(orientation)?;
    Ok(())
}
