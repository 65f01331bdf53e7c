use anyhow::Result;
use clap::{CommandFactory, Parser};

use mfa_audit_tools::commands;
use mfa_audit_tools::utils::render;

#[derive(Parser)]
#[command(name = "mfa-audit")]
#[command(about = "MFA enrollment dump audit tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the enrollment dump (.gz and .zst are decompressed automatically)
    #[arg(default_value = "data.txt")]
    dump_file: String,

    /// Disable ANSI color in the report output
    #[arg(long)]
    no_color: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "mfa-audit", &mut std::io::stdout());
        return Ok(());
    }

    let color = render::color_enabled(cli.no_color);
    commands::enrollment_audit::run(&cli.dump_file, color)
}
