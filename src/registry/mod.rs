//! Extension registry: maps file names to languages and languages to
//! comment families.
//!
//! Both tables are immutable process-wide data. The extension table is
//! indexed once on first use by its lowercased key; the source table is
//! kept for ordered listings.

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::classifier::Family;

use table::EXTENSIONS;

/// Language-name substrings and the comment family they select. The first
/// substring found in a language name wins, so exceptions precede the
/// broader entries they would otherwise fall under.
static FAMILIES: &[(&str, Family)] = &[
    // Exceptions to broader entries below
    ("JSON with Comments", Family::CStyle),
    ("JSON5", Family::CStyle),
    ("Protocol Buffer Text", Family::Hash),
    ("WebAssembly", Family::Semicolon),
    ("Lisp", Family::Semicolon),
    // Hash
    ("Python", Family::Hash),
    ("Cython", Family::Hash),
    ("Ren'Py", Family::Hash),
    ("GYP", Family::Hash),
    ("Sage", Family::Hash),
    ("Mojo", Family::Hash),
    ("GDScript", Family::Hash),
    ("Vyper", Family::Hash),
    ("Snakemake", Family::Hash),
    ("Starlark", Family::Hash),
    ("Bazel", Family::Hash),
    ("Ruby", Family::Hash),
    ("Crystal", Family::Hash),
    ("Perl", Family::Hash),
    ("Raku", Family::Hash),
    ("Shell", Family::Hash),
    ("Nushell", Family::Hash),
    ("Zsh", Family::Hash),
    ("Fish", Family::Hash),
    ("Ebuild", Family::Hash),
    ("PKGBUILD", Family::Hash),
    ("RPM Spec", Family::Hash),
    ("Just", Family::Hash),
    ("Tcl", Family::Hash),
    ("Expect", Family::Hash),
    ("AWK", Family::Hash),
    ("Sed", Family::Hash),
    ("Nim", Family::Hash),
    ("Elixir", Family::Hash),
    ("CoffeeScript", Family::Hash),
    ("R Script", Family::Hash),
    ("Julia", Family::Hash),
    ("Janet", Family::Hash),
    ("Roc", Family::Hash),
    ("Smali", Family::Hash),
    ("Robot Framework", Family::Hash),
    ("Gherkin", Family::Hash),
    ("WDL", Family::Hash),
    ("CWL", Family::Hash),
    ("Gnuplot", Family::Hash),
    ("Puppet", Family::Hash),
    ("Dockerfile", Family::Hash),
    ("Makefile", Family::Hash),
    ("CMake", Family::Hash),
    ("Meson", Family::Hash),
    ("Ninja", Family::Hash),
    ("GN Build", Family::Hash),
    ("Autoconf", Family::Hash),
    ("Automake", Family::Hash),
    ("QMake", Family::Hash),
    ("Kconfig", Family::Hash),
    ("Packer", Family::Hash),
    ("HCL", Family::Hash),
    ("Terraform", Family::Hash),
    ("Nix", Family::Hash),
    ("SaltStack", Family::Hash),
    ("YAML", Family::Hash),
    ("TOML", Family::Hash),
    ("Config", Family::Hash),
    ("Properties", Family::Hash),
    ("Dotenv", Family::Hash),
    ("Ignore", Family::Hash),
    ("Git Attributes", Family::Hash),
    ("CODEOWNERS", Family::Hash),
    ("Procfile", Family::Hash),
    ("Caddyfile", Family::Hash),
    ("Desktop Entry", Family::Hash),
    ("Systemd Unit", Family::Hash),
    ("Pip Requirements", Family::Hash),
    ("Gettext Catalog", Family::Hash),
    ("Cap'n Proto", Family::Hash),
    ("GraphQL", Family::Hash),
    // Double dash
    ("SQL", Family::DoubleDash),
    ("HiveQL", Family::DoubleDash),
    ("CQL", Family::DoubleDash),
    ("Lua", Family::DoubleDash),
    ("Teal", Family::DoubleDash),
    ("MoonScript", Family::DoubleDash),
    ("Nelua", Family::DoubleDash),
    ("Haskell", Family::DoubleDash),
    ("Cabal", Family::DoubleDash),
    ("Elm", Family::DoubleDash),
    ("PureScript", Family::DoubleDash),
    ("Idris", Family::DoubleDash),
    ("Agda", Family::DoubleDash),
    ("Lean", Family::DoubleDash),
    ("Curry", Family::DoubleDash),
    ("Futhark", Family::DoubleDash),
    ("Dhall", Family::DoubleDash),
    ("Ada", Family::DoubleDash),
    ("VHDL", Family::DoubleDash),
    ("AppleScript", Family::DoubleDash),
    ("Eiffel", Family::DoubleDash),
    // Semicolon
    ("Scheme", Family::Semicolon),
    ("Racket", Family::Semicolon),
    ("Clojure", Family::Semicolon),
    ("EDN", Family::Semicolon),
    ("Fennel", Family::Semicolon),
    ("Assembly", Family::Semicolon),
    ("INI", Family::Semicolon),
    ("Windows Registry", Family::Semicolon),
    ("AutoHotkey", Family::Semicolon),
    ("AutoIt", Family::Semicolon),
    ("DNS Zone", Family::Semicolon),
    ("LLVM IR", Family::Semicolon),
    ("G-code", Family::Semicolon),
    ("Inno Setup", Family::Semicolon),
    ("NSIS", Family::Semicolon),
    // Percent
    ("TeX", Family::Percent),
    ("Erlang", Family::Percent),
    ("Prolog", Family::Percent),
    ("PostScript", Family::Percent),
    ("Metafont", Family::Percent),
    ("MetaPost", Family::Percent),
    ("LilyPond", Family::Percent),
    ("MATLAB", Family::Percent),
    // XML-style blocks
    ("XML", Family::Xml),
    ("HTML", Family::Xml),
    ("XSLT", Family::Xml),
    ("SVG", Family::Xml),
    ("XAML", Family::Xml),
    ("XLIFF", Family::Xml),
    ("MSBuild", Family::Xml),
    ("Vue", Family::Xml),
    ("Svelte", Family::Xml),
    ("Markdown", Family::Xml),
    ("MDX", Family::Xml),
    ("ColdFusion", Family::Xml),
    ("ASP.NET", Family::Xml),
    // No comments
    ("JSON", Family::NoComments),
    ("Jupyter Notebook", Family::NoComments),
    ("Text", Family::NoComments),
    ("WebVTT", Family::NoComments),
    ("AsciiDoc", Family::NoComments),
    ("Org", Family::NoComments),
    ("CSV", Family::NoComments),
    ("TSV", Family::NoComments),
    ("Diff", Family::NoComments),
    ("Lock File", Family::NoComments),
    ("Go Checksums", Family::NoComments),
    ("Batch", Family::NoComments),
    ("Visual Basic", Family::NoComments),
    ("VBScript", Family::NoComments),
    ("Fortran", Family::NoComments),
    ("COBOL", Family::NoComments),
    ("Brainfuck", Family::NoComments),
];

/// A resolved table entry: the key that matched and its language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub key: &'static str,
    pub language: &'static str,
}

/// One line of the supported-language listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub language: &'static str,
    pub family: Family,
    pub keys: Vec<&'static str>,
}

fn index() -> &'static HashMap<String, usize> {
    static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(EXTENSIONS.len());
        for (pos, (key, _)) in EXTENSIONS.iter().enumerate() {
            // Duplicate keys keep their first occurrence.
            map.entry(key.to_ascii_lowercase()).or_insert(pos);
        }
        map
    })
}

fn lookup(key: &str) -> Option<Mapping> {
    let pos = *index().get(key.to_ascii_lowercase().as_str())?;
    let (key, language) = EXTENSIONS[pos];
    Some(Mapping { key, language })
}

/// Resolve a bare file name (no directory part) to its language.
///
/// The whole name is probed first as `.<name>`; after that every dot in the
/// name, left to right, starts a candidate suffix, so the longest suffix
/// that has an entry wins. Matching ignores ASCII case.
pub fn resolve(file_name: &str) -> Option<Mapping> {
    if file_name.is_empty() {
        return None;
    }
    if let Some(mapping) = lookup(&format!(".{file_name}")) {
        return Some(mapping);
    }
    file_name
        .match_indices('.')
        .find_map(|(pos, _)| lookup(&file_name[pos..]))
}

/// Comment family for a language name; C-style when nothing matches.
pub fn family_of(language: &str) -> Family {
    FAMILIES
        .iter()
        .find(|(needle, _)| language.contains(needle))
        .map(|&(_, family)| family)
        .unwrap_or(Family::CStyle)
}

/// Every language in the table, in first-appearance order, with the keys
/// that map to it.
pub fn languages() -> Vec<LanguageSummary> {
    let mut out: Vec<LanguageSummary> = Vec::new();
    let mut positions: HashMap<&'static str, usize> = HashMap::new();
    for &(key, language) in EXTENSIONS {
        let slot = *positions.entry(language).or_insert_with(|| {
            out.push(LanguageSummary {
                language,
                family: family_of(language),
                keys: Vec::new(),
            });
            out.len() - 1
        });
        if !out[slot].keys.iter().any(|k| k.eq_ignore_ascii_case(key)) {
            out[slot].keys.push(key);
        }
    }
    out
}
