// ==========================================
// Skill Assessment Suite - command-line entry
// ==========================================
// Thin file boundary around the backup engine:
//
//   skill-assessment export [dir] [--hospital <id>] [--department <id>]
//   skill-assessment import <file> [--hospital <id>] [--department <id>] [--yes]
//
// The scope flags reproduce the navigation state the frontend would
// hold; without them the scope is "all".
// ==========================================

use skill_assessment::app::AppState;
use skill_assessment::backup::{AutoConfirm, ConfirmationGate, ImportOutcome};
use skill_assessment::config::AppConfig;
use skill_assessment::domain::{NavState, View};
use skill_assessment::{i18n, logging};
use std::io::Write;
use std::path::PathBuf;

/// Asks on stdin, y/N.
struct StdinGate;

impl ConfirmationGate for StdinGate {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

struct CliArgs {
    command: String,
    path: Option<PathBuf>,
    hospital_id: Option<String>,
    department_id: Option<String>,
    assume_yes: bool,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or_else(usage)?;

    let mut parsed = CliArgs {
        command,
        path: None,
        hospital_id: None,
        department_id: None,
        assume_yes: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hospital" => parsed.hospital_id = args.next(),
            "--department" => parsed.department_id = args.next(),
            "--yes" => parsed.assume_yes = true,
            other if parsed.path.is_none() => parsed.path = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument: {other}\n{}", usage())),
        }
    }
    Ok(parsed)
}

fn usage() -> String {
    "usage: skill-assessment <export [dir] | import <file>> \
     [--hospital <id>] [--department <id>] [--yes]"
        .to_string()
}

fn nav_from_args(args: &CliArgs) -> NavState {
    match (&args.hospital_id, &args.department_id) {
        (Some(h), Some(d)) => NavState {
            selected_hospital_id: Some(h.clone()),
            selected_department_id: Some(d.clone()),
            current_view: View::DepartmentView,
        },
        (Some(h), None) => NavState::in_hospital(h.clone()),
        _ => NavState::hospital_list(),
    }
}

#[tokio::main]
async fn main() {
    logging::init();

    let config = AppConfig::load();
    i18n::set_locale(&config.locale);

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let db_path = config.resolved_db_path();
    tracing::info!(version = skill_assessment::VERSION, db_path = %db_path, "starting");

    let mut state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            std::process::exit(1);
        }
    };
    state.nav = nav_from_args(&args);

    match args.command.as_str() {
        "export" => {
            let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
            match state.save_backup_to_dir(&dir).await {
                Ok(path) => println!("{}", path.display()),
                Err(err) => {
                    tracing::error!(error = %err, "export failed");
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
            }
        }
        "import" => {
            let Some(path) = args.path else {
                eprintln!("{}", usage());
                std::process::exit(2);
            };
            let gate: Box<dyn ConfirmationGate> = if args.assume_yes {
                Box::new(AutoConfirm)
            } else {
                Box::new(StdinGate)
            };
            match state.load_backup_from_file(&path, gate.as_ref()).await {
                Ok(ImportOutcome::Applied { message, warnings }) => {
                    for warning in warnings {
                        eprintln!("{warning}");
                    }
                    println!("{message}");
                }
                Ok(ImportOutcome::Cancelled) => {
                    println!("{}", i18n::t("backup.cancelled"));
                }
                Err(err) => {
                    tracing::error!(error = %err, "import failed");
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
            }
        }
        other => {
            eprintln!("unknown command: {other}\n{}", usage());
            std::process::exit(2);
        }
    }
}
