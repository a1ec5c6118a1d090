use microsh::error::ShellError;
use microsh::flags::Flags;
use microsh::shell::Shell;
use std::env;
use tracing_subscriber::EnvFilter;

fn init_logging(debug: bool) {
    // RUST_LOG wins unless --debug was given.
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("microsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    init_logging(flags.is_set("debug"));

    let mut shell = Shell::new(&flags)?;
    match flags.get_value("command") {
        Some(line) => Ok(shell.run_command(line)),
        None => shell.run(),
    }
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("microsh: {}", e);
            if matches!(e, ShellError::FlagError(_)) {
                2
            } else {
                1
            }
        }
    };
    std::process::exit(code);
}
