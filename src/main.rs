//! `quiz-trainer` 바이너리 진입점.

use quiz_trainer::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let result = match action {
        CliAction::InspectConfig => {
            quiz_trainer::inspect_config_pretty_json().map(|json| println!("{json}"))
        }
        CliAction::Interactive(options) => quiz_trainer::run_terminal(options).await,
        CliAction::Serve { options, bind } => quiz_trainer::serve(options, bind).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
