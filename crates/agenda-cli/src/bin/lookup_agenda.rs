use agenda_cli::{LookupCli, init_logging, run_lookup};
use clap::Parser;

fn main() {
    // Reset SIGPIPE to default behavior so piping into `head` exits quietly
    #[cfg(unix)]
    reset_sigpipe();

    let cli = LookupCli::parse();
    init_logging(cli.common.log_level);

    if let Err(e) = run_lookup(cli) {
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
