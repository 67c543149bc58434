use std::io::{self, BufWriter};
use std::process::ExitCode;

use pwcheck::{parse_args, run, Error, RunOptions, Settings};

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_tracing();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pwcheck: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn try_main() -> Result<(), Error> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let invocation = parse_args(&args)?;
    let settings = Settings::from_env()?;
    let config = invocation.policy(&settings)?;

    let options = RunOptions {
        config,
        stats: invocation.stats,
        output: invocation.output,
        max_length: settings.max_length,
    };

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    run(stdin, &mut stdout, &options)?;
    Ok(())
}
