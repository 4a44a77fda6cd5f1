use batch_uploader::config::Settings;
use batch_uploader::remote::connector_for;
use batch_uploader::transfer;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = Settings::from_env();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if transfer::run(&settings, connector_for).is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
