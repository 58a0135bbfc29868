use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};
use crate::section::Section;

/// Options shared by every stage of the analysis.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub elf: PathBuf,
    /// Binutils prefix, e.g. `aarch64-linux-gnu-`.
    pub tools_prefix: String,
    pub verbose: bool,
    pub demangle: bool,
    pub color: bool,
}

impl Config {
    pub fn new(elf: impl Into<PathBuf>) -> Self {
        Self {
            elf: elf.into(),
            ..Self::default()
        }
    }

    fn objdump(&self) -> String {
        format!("{}objdump", self.tools_prefix)
    }

    /// `objdump -t -j <section>`: the section's symbol table.
    pub fn symbol_dump(&self, section: Section) -> Result<String> {
        self.run(&["-t", "-j", section.name()])
    }

    /// `objdump -Dr -j <section>`: disassembly with relocations.
    pub fn disassemble(&self, section: Section) -> Result<String> {
        self.run(&["-Dr", "-j", section.name()])
    }

    fn run(&self, flags: &[&str]) -> Result<String> {
        let tool = self.objdump();
        let cmd = format!("{} {} {}", tool, flags.join(" "), self.elf.display());
        log::info!("running {cmd}");

        let output = Command::new(&tool)
            .args(flags)
            .arg(&self.elf)
            .output()
            .map_err(|source| Error::Spawn {
                cmd: cmd.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                cmd,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
