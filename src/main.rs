use std::env;
use std::process::ExitCode;

mod cli;
mod terminal;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("PASSGEN_LOG", "warn"))
        .init();

    #[cfg(target_os = "linux")]
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
