//! termfolio - An interactive portfolio for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use termfolio::{Options, ServeOptions};
use termfolio_core::prelude::*;

/// termfolio - An interactive portfolio for the terminal
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "An interactive portfolio for the terminal", long_about = None)]
struct Args {
    /// Portfolio document (TOML)
    #[arg(short, long, value_name = "PATH", default_value = "portfolio.toml")]
    portfolio: PathBuf,

    /// Settings file (defaults to <config_dir>/termfolio/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Visitor's display name (defaults to $USER, then $LOGNAME)
    #[arg(short, long, value_name = "NAME")]
    user: Option<String>,

    /// Render without colors
    #[arg(long)]
    no_color: bool,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Run the SSH server instead of a single local session
    #[arg(long)]
    serve: bool,

    /// Address the SSH server binds to
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0", requires = "serve")]
    listen: IpAddr,

    /// Port the SSH server listens on
    #[arg(long, default_value_t = termfolio_ssh::DEFAULT_PORT, requires = "serve")]
    port: u16,

    /// SSH host key, generated on first start
    #[arg(long, value_name = "PATH", default_value = termfolio_ssh::DEFAULT_HOST_KEY, requires = "serve")]
    host_key: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = termfolio::init_config(args.config)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let options = Options {
        portfolio: args.portfolio,
        config: args.config,
        user: args.user,
        no_color: args.no_color,
    };

    if args.serve {
        let serve = ServeOptions {
            listen: args.listen,
            port: args.port,
            host_key: args.host_key,
        };
        return termfolio::serve(options, serve).await;
    }

    termfolio::run(options).await
}
