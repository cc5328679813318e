use echo_command::Interpreter;
use log::debug;
use std::ffi::OsString;

/// Arguments that are not valid UTF-8 are printed with U+FFFD in place of
/// the bad bytes rather than rejected.
fn lossy_args(args: impl IntoIterator<Item = OsString>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

fn main() {
    env_logger::init();

    let args = lossy_args(std::env::args_os().skip(1));
    let args_ref: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    let mut sh = Interpreter::default();
    let code = match sh.run("echo", &args_ref) {
        Ok(code) => code,
        Err(e) => {
            debug!("echo failed: {:?}", e);
            eprintln!("echo: {}", e);
            1
        }
    };
    std::process::exit(code);
}
