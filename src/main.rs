use create_vite_island::{
    cli::{get_log_level_from_verbose, parse_cli, run},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = parse_cli();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    match run(args) {
        Ok(report) => {
            log::debug!("Finished with install outcome {:?}", report.install);
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(err) => default_error_handler(err),
    }
}
