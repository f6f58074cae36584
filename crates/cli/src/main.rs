use clap::Parser;
use count_text_cli::args::Args;
use count_text_cli::config::Config;
use count_text_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match count_text_engine::run(&config) {
        Ok(result) => {
            presentation::print_results(&result, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
