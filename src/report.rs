use std::collections::HashSet;
use std::fmt;

use ansi_term::{Color, Style};

use crate::elfmap::ElfMap;
use crate::section::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Defined in `.text` but only called from `.init.text`.
    Optimize { name: String, size: u64 },
    /// Called from `.text`, defined in `.init.text` and not in `.text`.
    Bug { name: String },
}

impl Finding {
    fn tag(&self) -> &'static str {
        match self {
            Finding::Optimize { .. } => "OPTIMIZE",
            Finding::Bug { .. } => "BUG",
        }
    }

    fn tag_style(&self) -> Style {
        match self {
            Finding::Optimize { .. } => Color::Yellow.normal(),
            Finding::Bug { .. } => Color::Red.bold(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Finding::Optimize { name, .. } | Finding::Bug { name } => name,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::default().write(f, self)
    }
}

/// Cross-references both sections. Every qualifying symbol is reported,
/// `OPTIMIZE` findings first.
pub fn findings(map: &ElfMap) -> Vec<Finding> {
    let text_calls: HashSet<&str> = map.calls(Section::Text).iter().collect();
    let init_calls: HashSet<&str> = map.calls(Section::InitText).iter().collect();
    let text_symtab = map.symtab(Section::Text);

    let mut out = Vec::new();
    for sym in text_symtab.iter() {
        let name = sym.name.as_str();
        if init_calls.contains(name) && !text_calls.contains(name) {
            out.push(Finding::Optimize {
                name: sym.name.clone(),
                size: sym.size,
            });
        }
    }
    for sym in map.symtab(Section::InitText).iter() {
        let name = sym.name.as_str();
        if text_calls.contains(name) && !text_symtab.contains(name) {
            out.push(Finding::Bug {
                name: sym.name.clone(),
            });
        }
    }
    out
}

/// Formats findings, optionally demangled and colored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer {
    pub demangle: bool,
    pub color: bool,
}

impl Printer {
    pub fn new(demangle: bool, color: bool) -> Self {
        Self { demangle, color }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, finding: &Finding) -> fmt::Result {
        let tag = finding.tag();
        if self.color {
            write!(f, "{}", finding.tag_style().paint(tag))?;
        } else {
            f.write_str(tag)?;
        }

        let name = finding.name();
        let name = if self.demangle {
            format!("{:#}", rustc_demangle::demangle(name))
        } else {
            name.to_string()
        };
        match finding {
            Finding::Optimize { size, .. } => write!(f, " {} size={}", name, size),
            Finding::Bug { .. } => write!(f, "  {}", name),
        }
    }

    pub fn render(&self, finding: &Finding) -> String {
        Line {
            printer: *self,
            finding,
        }
        .to_string()
    }

    pub fn print(&self, findings: &[Finding]) {
        for finding in findings {
            println!("{}", self.render(finding));
        }
    }
}

struct Line<'a> {
    printer: Printer,
    finding: &'a Finding,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write(f, self.finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym_line(name: &str, size: u64) -> String {
        format!("0000000000001000 g     F .text\t{:016x} {}\n", size, name)
    }

    fn call_line(name: &str) -> String {
        format!("    1000:\t94000010 \tbl\t2000 <{}>\n", name)
    }

    fn map(
        text_syms: &[(&str, u64)],
        init_syms: &[(&str, u64)],
        text_calls: &[&str],
        init_calls: &[&str],
    ) -> ElfMap {
        let listing = |syms: &[(&str, u64)]| {
            syms.iter()
                .map(|(n, s)| sym_line(n, *s))
                .collect::<String>()
        };
        let dis = |calls: &[&str]| calls.iter().copied().map(call_line).collect::<String>();

        let mut map = ElfMap::default();
        map.load_symtab(Section::Text, &listing(text_syms), false);
        map.load_symtab(Section::InitText, &listing(init_syms), false);
        map.load_callmap(Section::Text, &dis(text_calls), false);
        map.load_callmap(Section::InitText, &dis(init_calls), false);
        map
    }

    fn lines(map: &ElfMap) -> Vec<String> {
        findings(map).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn init_only_callee_is_an_optimization() {
        let m = map(&[("foo", 16)], &[], &[], &["foo"]);
        assert_eq!(lines(&m), ["OPTIMIZE foo size=16"]);
    }

    #[test]
    fn callee_used_at_runtime_is_not_reported() {
        let m = map(&[("foo", 16)], &[], &["foo"], &["foo"]);
        assert!(lines(&m).is_empty());
    }

    #[test]
    fn uncalled_text_symbol_is_not_reported() {
        let m = map(&[("foo", 16)], &[], &[], &[]);
        assert!(lines(&m).is_empty());
    }

    #[test]
    fn runtime_call_into_init_is_a_bug() {
        let m = map(&[], &[("bar", 8)], &["bar"], &[]);
        assert_eq!(lines(&m), ["BUG  bar"]);
    }

    #[test]
    fn runtime_call_with_text_definition_is_not_a_bug() {
        let m = map(&[("bar", 8)], &[("bar", 8)], &["bar"], &[]);
        assert!(lines(&m).is_empty());
    }

    #[test]
    fn every_finding_is_reported() {
        let m = map(
            &[("a", 1), ("b", 2), ("c", 3)],
            &[("x", 4), ("y", 5)],
            &["c", "x", "y", "y"],
            &["a", "b", "c"],
        );
        assert_eq!(
            lines(&m),
            ["OPTIMIZE a size=1", "OPTIMIZE b size=2", "BUG  x", "BUG  y"]
        );
    }

    #[test]
    fn demangles_rust_names() {
        let finding = Finding::Bug {
            name: "_ZN4core3fmt5write17h0123456789abcdefE".to_string(),
        };
        assert_eq!(Printer::new(true, false).render(&finding), "BUG  core::fmt::write");
        assert_eq!(
            Printer::new(false, false).render(&finding),
            "BUG  _ZN4core3fmt5write17h0123456789abcdefE"
        );
    }

    #[test]
    fn color_only_wraps_the_tag() {
        let finding = Finding::Optimize {
            name: "foo".to_string(),
            size: 16,
        };
        let line = Printer::new(false, true).render(&finding);
        assert!(line.starts_with("\x1b["));
        assert!(line.ends_with("OPTIMIZE\x1b[0m foo size=16"));
    }
}
