use clap::Parser;
use nix_and_poetry::app;
use nix_and_poetry::utils::logger;
use nix_and_poetry::CliConfig;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = app::run_direct() {
        let exit_code = app::report_failure(&mut std::io::stderr(), &e);
        std::process::exit(exit_code);
    }
}
