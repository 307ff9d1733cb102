use std::process::ExitCode;

use gtx_cli::cli::commands::translate::{self, TranslateOptions};
use gtx_cli::cli::{Args, exit_code_for};
use gtx_cli::output::{self, OutputConfig};
use gtx_cli::translation::print_languages;
use gtx_cli::ui::Style;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse_normalized();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    output::init(OutputConfig::with_quiet(args.quiet));

    if args.languages {
        print_languages();
        return ExitCode::SUCCESS;
    }

    let options = TranslateOptions {
        text: args.text,
        source: args.source,
        target: args.target,
        reverse: args.reverse,
        set: args.set,
        config: args.config,
    };

    match translate::run_translate(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            ExitCode::from(exit_code_for(&e) as u8)
        }
    }
}
