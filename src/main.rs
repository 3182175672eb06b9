use clap::{App, Arg};
use lc3vm::{Config, VmError};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("LC-3 VM")
        .arg(
            Arg::with_name("PROGRAM")
                .help("The object file to run.")
                .required(true)
                .index(1),
        )
        .get_matches();

    let config = Config::new(matches.value_of("PROGRAM").unwrap());

    if let Err(e) = lc3vm::run(config) {
        log::error!("{}", e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(error: &VmError) -> i32 {
    match error {
        VmError::IllegalOpcode { .. } => 1,
        VmError::Io(_) => 2,
    }
}
