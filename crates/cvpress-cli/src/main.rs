use clap::Parser;
use cvpress::{Cli, run};

fn main() {
    // Restore default SIGPIPE handling so output piped into a pager that
    // exits early terminates the process instead of panicking.
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
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
