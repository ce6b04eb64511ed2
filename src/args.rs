use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{ArgGroup, Parser};
use log::debug;


/// the front end of the bucket compiler.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["read", "lex", "parse", "compile"])))]
pub struct Arguments {
    /// Print the characters of the file as decoded.
    #[arg(long, value_name = "PATH")]
    pub read: Option<PathBuf>,

    /// Print the tokens of the file, one per line.
    #[arg(long, value_name = "PATH")]
    pub lex: Option<PathBuf>,

    /// Parse the file and print it back out.
    #[arg(long, value_name = "PATH")]
    pub parse: Option<PathBuf>,

    /// Parse the file and declare its classes, methods and fields.
    #[arg(long, value_name = "PATH")]
    pub compile: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Read,
    Lex,
    Parse,
    Compile,
}

impl Arguments {
    /// Parse the arguments of this process. Anything but exactly one mode
    /// and its path is rejected, including requests for help or the version.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(arguments) => Ok(arguments),
            Err(err) => {
                debug!("rejected arguments: {:?}", err.kind());
                bail!("bad command line arguments")
            }
        }
    }

    /// The selected mode and the file it applies to.
    pub fn mode(&self) -> Option<(Mode, &Path)> {
        [
            (Mode::Read, &self.read),
            (Mode::Lex, &self.lex),
            (Mode::Parse, &self.parse),
            (Mode::Compile, &self.compile),
        ]
        .into_iter()
        .find_map(|(mode, path)| path.as_deref().map(|path| (mode, path)))
    }
}
