use gms_harmonize_core::{ComponentKey, Config, HookError, LibraryEntry, VersionLabel};
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // anything after a second `=` is not part of the declaration
    Regex::new(r"^(?P<key>[^=]+)=(?P<group>[^:=]+):(?P<component>[^:=]+):(?P<version>[^=]*)")
        .expect("hardcoded regex must compile")
});

/// The properties file split into untouched lines and library declarations.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Lines without the declaration marker, in file order
    pub passthrough: Vec<String>,
    /// Declarations in file order, vendor or not
    pub entries: Vec<LibraryEntry>,
    /// The excluded component was declared, whether or not it was harmonized
    pub has_excluded_component: bool,
    pub trailing_newline: bool,
    /// The file uses `\r\n` line endings
    pub crlf: bool,
}

impl Extraction {
    #[must_use]
    pub const fn line_ending(&self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }

    pub fn harmonizable(&self) -> impl Iterator<Item = &LibraryEntry> {
        self.entries.iter().filter(|e| e.is_harmonizable())
    }
}

/// Split `content` into pass-through lines and library declarations.
///
/// A declaration is harmonizable when its group belongs to a vendor family, unless it is the
/// excluded component and `compatible` is false.
///
/// # Errors
/// Returns [`HookError::MalformedDeclaration`] when a marked line is not `<key>=<group>:<component>:<version>`.
pub fn extract(content: &str, config: &Config, compatible: bool) -> Result<Extraction, HookError> {
    let (body, trailing_newline) = match content.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (content, false),
    };
    let crlf = content.contains("\r\n");
    let mut extraction = Extraction {
        trailing_newline,
        crlf,
        ..Extraction::default()
    };
    if body.is_empty() {
        return Ok(extraction);
    }

    for line in body.split('\n') {
        let line = if crlf {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };
        if !line.contains(config.declaration_marker.as_str()) {
            extraction.passthrough.push(line.to_string());
            continue;
        }
        let caps = DECLARATION_PATTERN
            .captures(line)
            .ok_or_else(|| HookError::MalformedDeclaration {
                line: line.to_string(),
            })?;
        let group = caps["group"].trim();
        let component = caps["component"].trim();
        let version = caps["version"].trim();

        let mut harmonizable = config.is_vendor_group(group);
        if harmonizable && config.is_excluded(group, component) {
            extraction.has_excluded_component = true;
            harmonizable = compatible;
        }
        log::debug!("declaration {group}:{component}:{version} harmonizable={harmonizable}");
        extraction.entries.push(LibraryEntry::new(
            caps["key"].trim(),
            ComponentKey::new(group, component),
            VersionLabel::parse(version),
            harmonizable,
        ));
    }
    Ok(extraction)
}
