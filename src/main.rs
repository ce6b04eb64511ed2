mod args;
mod cli;


use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::bail;
use bucket_common::source::SourceFile;
use env_logger::{Builder, Env};
use log::info;

use args::{Arguments, Mode};

fn main() -> ExitCode {
    logger(Env::default()).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "bucket: {} {err:#}",
                console::style("error:").red().for_stderr()
            );
            ExitCode::FAILURE
        }
    }
}

/// Warnings and errors are logged unless `RUST_LOG` says otherwise.
fn logger(env: Env) -> Builder {
    Builder::from_env(env.default_filter_or("warn"))
}

fn run() -> anyhow::Result<()> {
    let arguments = Arguments::from_env()?;
    let Some((mode, path)) = arguments.mode() else {
        bail!("bad command line arguments");
    };

    info!("{mode:?} '{}'", path.display());

    let source = SourceFile::open(path)?;
    let mut out = BufWriter::new(io::stdout().lock());

    match mode {
        Mode::Read => cli::read(source, &mut out)?,
        Mode::Lex => cli::lex(&source, &mut out, console::colors_enabled())?,
        Mode::Parse => cli::parse_and_print(&source, &mut out)?,
        Mode::Compile => cli::compile(&source)?,
    }

    out.flush()?;
    Ok(())
}
