use anyhow::Result;
use clap::Parser;

use release_gate::gate::{self, GateOptions};
use release_gate::git::Git2Repository;
use release_gate::helper::ScriptHelper;
use release_gate::{config, ui, ReleaseGateError};

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    about = "Check branch, cleanliness and tag state before cutting a release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Override the configured release branch")]
    branch: Option<String>,

    #[arg(long, help = "Run all checks but do not invoke the tagging helper")]
    dry_run: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.version {
        println!("release-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Open the repository in the current working directory
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let helper = ScriptHelper::new(&config.helper);

    let options = GateOptions {
        branch_override: args.branch,
        dry_run: args.dry_run,
    };

    match gate::run(&repo, &helper, &config, &options) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            if let ReleaseGateError::Helper { detail } = &e {
                log::debug!("tagging helper failure: {}", detail);
            }
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
