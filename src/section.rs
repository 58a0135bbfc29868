use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Runtime code, retained after boot.
    Text,
    /// Init-only code, discarded after boot.
    InitText,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Text, Section::InitText];

    pub fn name(self) -> &'static str {
        match self {
            Section::Text => ".text",
            Section::InitText => ".init.text",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
