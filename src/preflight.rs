use std::path::Path;

use elf::endian::AnyEndian;
use elf::ElfBytes;

use crate::error::Result;
use crate::section::Section;

/// Looks at `path` before objdump does and warns about anything odd.
///
/// Nothing found here is fatal: objdump also reads archives and non-ELF
/// formats, and only warns when `-j` names a missing section. Whether the
/// run fails is left to objdump's exit status.
pub fn check(path: &Path) {
    if let Err(e) = inspect(path) {
        log::warn!("{}: {}", path.display(), e);
    }
}

/// Parses `path` as ELF and logs where the analyzed sections are.
fn inspect(path: &Path) -> Result<()> {
    let content = std::fs::read(path)?;
    let file = ElfBytes::<AnyEndian>::minimal_parse(&content)?;

    for section in Section::ALL {
        match file.section_header_by_name(section.name())? {
            Some(shdr) => log::info!(
                "{}: {} at {:#x}, {:#x} bytes",
                path.display(),
                section,
                shdr.sh_addr,
                shdr.sh_size
            ),
            None => log::warn!("{}: no {} section", path.display(), section),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    fn scratch(name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("checkelf-{}-{}", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn non_elf_files_fail_to_parse() {
        let path = scratch("not-elf", b"definitely not an elf file");
        let res = inspect(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(Error::Elf(_))));
    }

    #[test]
    fn archives_only_warn() {
        let path = scratch("archive", b"!<arch>\n");
        check(&path);
        let res = inspect(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(Error::Elf(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = inspect(Path::new("/nonexistent/checkelf/input"));
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn accepts_own_executable() {
        let exe = std::env::current_exe().unwrap();
        assert!(inspect(&exe).is_ok());
    }
}
