pub mod check;
pub mod decode;
pub mod encode;
mod error;
pub mod input;

#[cfg(test)]
mod commands_tests;

/// Print `error: <msg>` to stderr and exit with status 1.
pub(crate) fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
