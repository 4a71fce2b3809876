use std::process::ExitCode;

use agent_validator::cli;
use agent_validator::config::Config;

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let rules = match config.load_rules() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match cli::run(&config, &rules, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
