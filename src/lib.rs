pub mod callmap;
pub mod elfmap;
pub mod error;
pub mod objdump;
pub mod preflight;
pub mod report;
pub mod section;
pub mod symtab;

use crate::elfmap::ElfMap;
use crate::error::Result;
use crate::objdump::Config;
use crate::report::Finding;

/// Runs the whole analysis over `config.elf`.
pub fn analyze(config: &Config) -> Result<Vec<Finding>> {
    preflight::check(&config.elf);
    let map = ElfMap::build(config)?;
    Ok(report::findings(&map))
}
