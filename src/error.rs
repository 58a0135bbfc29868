use std::{io, process::ExitStatus};

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("failed to run `{cmd}`: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("`{cmd}` exited with {status}: {stderr}")]
    ToolFailed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("elf parse error: {0}")]
    Elf(#[from] elf::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
