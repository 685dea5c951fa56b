use anyhow::{anyhow, Result};
use clap::Args;
use phonebook_config::validate_copy_feedback_ms;
use std::env;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// How long the "copied" hint stays visible, in milliseconds
    #[arg(long)]
    pub copy_feedback_ms: Option<u64>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub fn launch(config_path: Option<PathBuf>, args: TuiArgs, verbose: bool) -> Result<()> {
    let mut command = build_command(config_path, args)?;
    if verbose {
        eprintln!("launching {:?}", command.get_program());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        use anyhow::Context as _;
        let status = command.status().with_context(|| "launch phonebook-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(config_path: Option<PathBuf>, args: TuiArgs) -> Result<Command> {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if let Some(value) = args.copy_feedback_ms {
        let value = validate_copy_feedback_ms(value)?;
        command.arg("--copy-feedback-ms").arg(value.to_string());
    }
    if let Some(path) = args.log_file {
        command.arg("--log-file").arg(path);
    }
    Ok(command)
}

fn find_tui_binary() -> PathBuf {
    let name = format!("phonebook-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "phonebook-tui binary not found; build it with `cargo build -p phonebook-tui` or install the package"
        );
    }
    anyhow!("launch phonebook-tui failed: {}", err)
}
