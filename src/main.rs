use std::path::PathBuf;

use anyhow::Result;
use human_panic::setup_panic;

use movi_sort::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_configuration_file_option()?;

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let options = ProcessingOptions {
        config_path: PathBuf::from(
            matches
                .get_one::<String>("config")
                .expect("config option has a default value"),
        ),
        dry_run: matches.get_flag("dry"),
    };

    let result = if matches.get_flag("verify") {
        run_verification(options).map(|_| ())
    } else {
        organize(options).map(|_| ())
    };

    check_for_stdout_stream();

    result
}
