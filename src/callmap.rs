/// Call mnemonics as printed by objdump: branch-and-link (arm) and x86.
const CALL_INSNS: [&str; 2] = ["bl", "call"];

const MIN_FIELDS: usize = 5;

pub fn insn_is_call(insn: &str) -> bool {
    CALL_INSNS.contains(&insn)
}

/// Extracts the call target from one line of `objdump -Dr` output.
///
/// The mnemonic sits three tokens from the end and the annotated target,
/// `<name>`, is the last token:
///
/// ```text
///   401000:  e8 fb 0f 00 00   call   402000 <helper>
/// ```
pub fn parse_line(line: &str) -> Option<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_FIELDS || !insn_is_call(tokens[tokens.len() - 3]) {
        return None;
    }
    let target = tokens[tokens.len() - 1];
    let target = target.strip_prefix('<').unwrap_or(target);
    Some(target.strip_suffix('>').unwrap_or(target))
}

/// Call targets of one section in the order they appear, one per call site.
#[derive(Debug, Default, Clone)]
pub struct CallList {
    targets: Vec<String>,
}

impl CallList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.targets.push(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
