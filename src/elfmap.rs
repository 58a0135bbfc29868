use crate::callmap::{self, CallList};
use crate::error::Result;
use crate::objdump::Config;
use crate::section::Section;
use crate::symtab::{self, Symbol, SymbolTable};

/// Symbol tables and call lists of `.text` and `.init.text`.
#[derive(Debug, Default)]
pub struct ElfMap {
    text_symtab: SymbolTable,
    init_symtab: SymbolTable,
    text_calls: CallList,
    init_calls: CallList,
}

impl ElfMap {
    /// Runs objdump over both sections. Symbol tables are built first since
    /// call targets are resolved against them.
    pub fn build(config: &Config) -> Result<Self> {
        let mut map = Self::default();
        for section in Section::ALL {
            let listing = config.symbol_dump(section)?;
            map.load_symtab(section, &listing, config.verbose);
        }
        for section in Section::ALL {
            let listing = config.disassemble(section)?;
            map.load_callmap(section, &listing, config.verbose);
        }
        Ok(map)
    }

    pub fn symtab(&self, section: Section) -> &SymbolTable {
        match section {
            Section::Text => &self.text_symtab,
            Section::InitText => &self.init_symtab,
        }
    }

    pub fn calls(&self, section: Section) -> &CallList {
        match section {
            Section::Text => &self.text_calls,
            Section::InitText => &self.init_calls,
        }
    }

    /// Fills the symbol table of `section` from `objdump -t` output.
    pub fn load_symtab(&mut self, section: Section, listing: &str, verbose: bool) {
        let tab = match section {
            Section::Text => &mut self.text_symtab,
            Section::InitText => &mut self.init_symtab,
        };
        for line in listing.lines() {
            match symtab::parse_line(line) {
                Ok(sym) => {
                    if verbose {
                        println!("symtab[{}]: {}", section, sym.name);
                    }
                    tab.add(sym);
                }
                Err(skip) => log::trace!("symtab[{section}]: skipped ({skip:?}): {line:?}"),
            }
        }
        log::info!("symtab[{section}]: {} symbols", tab.len());
    }

    /// Looks `name` up in the symbol table of `section`. Calls out of `.text`
    /// may also land in `.init.text`.
    pub fn resolve(&self, section: Section, name: &str) -> Option<&Symbol> {
        self.symtab(section).get(name).or_else(|| match section {
            Section::Text => self.init_symtab.get(name),
            Section::InitText => None,
        })
    }

    /// Fills the call list of `section` from `objdump -Dr` output.
    pub fn load_callmap(&mut self, section: Section, listing: &str, verbose: bool) {
        let mut calls = CallList::new();
        for line in listing.lines() {
            let Some(name) = callmap::parse_line(line) else {
                continue;
            };

            match self.resolve(section, name) {
                Some(sym) => log::debug!("callmap {section}: {name} -> {:#x}", sym.addr),
                None => log::debug!("callmap {section}: {name} unresolved"),
            }

            if verbose {
                println!("callmap {}: {}", section, name);
            }
            calls.push(name);
        }
        log::info!("callmap {section}: {} calls", calls.len());
        match section {
            Section::Text => self.text_calls = calls,
            Section::InitText => self.init_calls = calls,
        }
    }
}
