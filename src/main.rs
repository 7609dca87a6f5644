use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use strata::error::StrataError;
use strata::{format, outline};

/// strata — markdown structural analysis for content pipelines.
/// Headings, anchors, and TOC trees the way a docs site needs them:
/// code blocks, HTML, and frontmatter never produce headings.
#[derive(Parser)]
#[command(name = "strata", version, about)]
struct Cli {
    /// Markdown file to analyze, or a directory to sweep for issues.
    path: Option<PathBuf>,

    /// Flat heading list with line numbers and unique anchors.
    #[arg(long)]
    headings: bool,

    /// Validate heading structure. With a directory, checks every
    /// markdown file under it.
    #[arg(long)]
    check: bool,

    /// Plain-text excerpt of at most CHARS characters.
    #[arg(long, value_name = "CHARS", num_args = 0..=1, default_missing_value = "200")]
    summary: Option<usize>,

    /// List ignore regions (authoring debug view).
    #[arg(long)]
    regions: bool,

    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "strata", &mut io::stdout());
        return;
    }

    let Some(ref path) = cli.path else {
        eprintln!("usage: strata <path> [--headings|--check|--summary N|--regions] [--json]");
        process::exit(3);
    };

    match run(&cli, path) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

/// Dispatch one invocation. Returns the process exit code: 0 clean,
/// 1 when --check found issues.
fn run(cli: &Cli, path: &Path) -> Result<i32, StrataError> {
    if path.is_dir() {
        return Ok(sweep(path, cli.json));
    }

    let text = read_text(path)?;

    if cli.regions {
        let regions = strata::regions(&text);
        if cli.json {
            print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "regions": regions,
            }));
        } else {
            let detail = format!("{} regions", regions.len());
            println!("{}", format::file_header(path, &detail, "regions"));
            print!("{}", format::region_list(&regions));
        }
        return Ok(0);
    }

    if cli.check {
        let report = strata::validate(&text);
        let code = i32::from(!report.is_valid);
        if cli.json {
            print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "report": report,
            }));
        } else {
            let detail = format!("{} headings", report.heading_count);
            println!("{}", format::file_header(path, &detail, "check"));
            print!("{}", format::validation_report(&report));
        }
        return Ok(code);
    }

    if let Some(max_length) = cli.summary {
        let summary = strata::summarize(&text, max_length);
        if cli.json {
            print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "summary": summary,
            }));
        } else {
            let detail = format!("{} chars", summary.len());
            println!("{}", format::file_header(path, &detail, "summary"));
            println!("{summary}");
        }
        return Ok(0);
    }

    if cli.headings {
        let mut records = strata::headings(&text);
        outline::anchor::assign_unique_ids(&mut records);
        if cli.json {
            print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "headings": records,
            }));
        } else {
            let detail = format!("{} headings", records.len());
            println!("{}", format::file_header(path, &detail, "headings"));
            print!("{}", format::heading_list(&text, &records));
        }
        return Ok(0);
    }

    // Default mode: the TOC tree.
    let records = strata::headings(&text);
    let nodes = outline::tree::build_tree(&records);
    if cli.json {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "toc": nodes,
        }));
    } else {
        let detail = format!("{} headings", records.len());
        println!("{}", format::file_header(path, &detail, "toc"));
        print!("{}", format::toc_tree(&nodes));
    }
    Ok(0)
}

/// Sweep a directory: validate every markdown file under it.
/// Exit 1 when any file has issues.
fn sweep(scope: &Path, json: bool) -> i32 {
    let results = strata::report::sweep::check_tree(scope);
    let any_invalid = results.iter().any(|r| !r.report.is_valid);

    if json {
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "path": r.path.display().to_string(),
                    "report": r.report,
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(entries));
    } else {
        println!("{}", format::sweep_report(scope, &results));
    }
    i32::from(any_invalid)
}

fn read_text(path: &Path) -> Result<String, StrataError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StrataError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(StrataError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(StrataError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    String::from_utf8(bytes).map_err(|_| StrataError::NotText {
        path: path.to_path_buf(),
    })
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("serde_json::Value is always serializable")
    );
}
