use crate::core::document_writer::convert;
use crate::domain::models::ConvertConfig;
use crate::domain::tables::DEFAULT_OUTPUT_FILE;
use crate::infra::console;
use crate::infra::logger::setup_logger;
use clap::Parser;
use log::{debug, error, info};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "codebase-txt")]
#[command(about = "Flatten a project tree into one annotated text file for AI notebooks", long_about = None)]
pub struct Cli {
    /// Project root. Prompted for when omitted.
    #[arg(long)]
    pub path: Option<String>,

    /// Output file name. Prompted for when omitted.
    #[arg(long)]
    pub output: Option<String>,

    /// Replaces the overview paragraph of the document.
    #[arg(long)]
    pub overview: Option<String>,

    /// Never prompt; missing values fall back to their defaults.
    #[arg(long)]
    pub non_interactive: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    MissingRoot,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::MissingRoot => ExitCode::from(2),
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;
    debug!("Command parameters: {:?}", cli);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let status = execute(&cli, &mut input, &mut stdout)?;
    Ok(status.into())
}

/// Drives one conversion. Only console I/O errors escape; conversion
/// failures are reported on `out` and turned into a status.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<RunStatus> {
    console::print_welcome_message(out)?;

    let root = resolve_root(cli, input, out)?;
    if !root.exists() {
        error!("Project root does not exist: {}", root.display());
        console::print_error(
            out,
            &format!("Error: Directory '{}' does not exist!", root.display()),
        )?;
        return Ok(RunStatus::MissingRoot);
    }

    let output = resolve_output(cli, input, out)?;
    let mut config = ConvertConfig::new(root, output);
    if let Some(overview) = &cli.overview {
        config.overview = overview.clone();
    }

    info!("Starting conversion of {}", config.root_path.display());
    match convert(&config, out) {
        Ok(report) => {
            console::print_success(out, &config.output_path, report.files_processed)?;
            Ok(RunStatus::Success)
        }
        Err(err) => {
            error!("Conversion failed: {:#}", err);
            console::print_error(out, &format!("Error during conversion: {:#}", err))?;
            Ok(RunStatus::Failed)
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve_root<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.path {
        return Ok(PathBuf::from(path));
    }

    let current_dir = env::current_dir()?;
    if cli.non_interactive {
        return Ok(current_dir);
    }

    writeln!(out, "Current directory: {}", current_dir.display())?;
    let answer = prompt(
        input,
        out,
        "Enter project root path (or press Enter to use current directory): ",
    )?;
    Ok(if answer.is_empty() {
        current_dir
    } else {
        PathBuf::from(answer)
    })
}

fn resolve_output<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> io::Result<PathBuf> {
    if let Some(output) = &cli.output {
        return Ok(PathBuf::from(output));
    }
    if cli.non_interactive {
        return Ok(PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    let answer = prompt(
        input,
        out,
        &format!("Enter output filename (or press Enter for '{}'): ", DEFAULT_OUTPUT_FILE),
    )?;
    Ok(if answer.is_empty() {
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    } else {
        PathBuf::from(answer)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["codebase-txt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_parsing() {
        let cli = cli(&[
            "--path",
            "./backend",
            "--output",
            "dump.txt",
            "--overview",
            "Billing API",
            "--non-interactive",
            "-vv",
        ]);

        assert_eq!(cli.path, Some("./backend".to_string()));
        assert_eq!(cli.output, Some("dump.txt".to_string()));
        assert_eq!(cli.overview, Some("Billing API".to_string()));
        assert!(cli.non_interactive);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = cli(&[]);
        assert!(cli.path.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.non_interactive);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_blank_prompts_use_defaults() {
        let cli = cli(&[]);
        let mut input = Cursor::new(b"\n\n".to_vec());
        let mut out = Vec::new();

        let root = resolve_root(&cli, &mut input, &mut out).unwrap();
        let output = resolve_output(&cli, &mut input, &mut out).unwrap();

        assert_eq!(root, env::current_dir().unwrap());
        assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Enter project root path"));
        assert!(text.contains("Enter output filename"));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let cli = cli(&["--path", "/srv/app", "--output", "app.txt"]);
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        assert_eq!(
            resolve_root(&cli, &mut input, &mut out).unwrap(),
            PathBuf::from("/srv/app")
        );
        assert_eq!(
            resolve_output(&cli, &mut input, &mut out).unwrap(),
            PathBuf::from("app.txt")
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_with_prompted_answers() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("app.js"), "console;\n").unwrap();
        let out_dir = TempDir::new().unwrap();
        let output = out_dir.path().join("doc.txt");

        let answers = format!("{}\n{}\n", project.path().display(), output.display());
        let mut input = Cursor::new(answers.into_bytes());
        let mut out = Vec::new();

        let status = execute(&cli(&[]), &mut input, &mut out).unwrap();

        assert_eq!(status, RunStatus::Success);
        let console_text = String::from_utf8(out).unwrap();
        assert!(console_text.contains("📊 Processed 1 files"));
        assert!(fs::read_to_string(&output).unwrap().contains("FILE: app.js"));
    }

    #[test]
    fn test_execute_missing_root() {
        let out_dir = TempDir::new().unwrap();
        let missing = out_dir.path().join("missing");
        let output = out_dir.path().join("doc.txt");
        let cli = cli(&[
            "--path",
            missing.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let mut out = Vec::new();

        let status = execute(&cli, &mut Cursor::new(Vec::new()), &mut out).unwrap();

        assert_eq!(status, RunStatus::MissingRoot);
        assert!(String::from_utf8(out).unwrap().contains("does not exist!"));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_reports_conversion_failure() {
        let project = TempDir::new().unwrap();
        let output = project.path().join("no-such-dir").join("doc.txt");
        let cli = cli(&[
            "--path",
            project.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let mut out = Vec::new();

        let status = execute(&cli, &mut Cursor::new(Vec::new()), &mut out).unwrap();

        assert_eq!(status, RunStatus::Failed);
        assert!(String::from_utf8(out).unwrap().contains("Error during conversion"));
    }
}
