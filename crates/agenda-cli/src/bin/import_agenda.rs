use agenda_cli::{ImportCli, init_logging, run_import};
use clap::Parser;

fn main() {
    #[cfg(unix)]
    reset_sigpipe();

    let cli = ImportCli::parse();
    init_logging(cli.common.log_level);

    if let Err(e) = run_import(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
