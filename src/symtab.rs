use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub addr: u64,
    pub size: u64,
    pub kind: String,
}

/// Why a symbol listing line did not produce a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSkip {
    /// Headers, blank lines and anything else under six fields.
    TooFewFields,
    BadAddr,
    BadSize,
}

const MIN_FIELDS: usize = 6;

/// Parses one line of `objdump -t` output.
///
/// Accepted rows look like
/// `ffff000000201000 g     F .text  0000000000000010 start_xen`:
/// field 0 is the address, field 2 the kind, field 4 the size and field 5
/// the name. Address and size are hexadecimal.
pub fn parse_line(line: &str) -> Result<Symbol, LineSkip> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_FIELDS {
        return Err(LineSkip::TooFewFields);
    }
    let addr = u64::from_str_radix(tokens[0], 16).map_err(|_| LineSkip::BadAddr)?;
    let size = u64::from_str_radix(tokens[4], 16).map_err(|_| LineSkip::BadSize)?;
    Ok(Symbol {
        name: tokens[5].to_string(),
        addr,
        size,
        kind: tokens[2].to_string(),
    })
}

/// Symbols of one section, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    tab: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `sym`, replacing any earlier symbol of the same name.
    pub fn add(&mut self, sym: Symbol) {
        self.tab.insert(sym.name.clone(), sym);
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.tab.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tab.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.tab.values()
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }
}
