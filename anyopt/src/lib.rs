//! Native Rust implementation of the AnyOption API.
//!
//! One facade resolves option values from two independent sources — POSIX
//! short / GNU long command-line arguments and a delimited configuration
//! file of `key : value` pairs and bare flags — into a single slot table
//! queryable by long name or by short character:
//!
//! ```
//! use anyopt::{AnyOption, Opt};
//!
//! let mut opt = AnyOption::new();
//! opt.declare(Opt::value("width").alias('w')).unwrap();
//! opt.declare(Opt::flag("verbose").alias('v')).unwrap();
//!
//! opt.process_buffer("# defaults\nwidth : 80\n");
//! opt.process_args(&["prog", "-v", "--width=100", "out.png"]);
//!
//! assert_eq!(opt.value("width"), Some("100"));
//! assert_eq!(opt.value('w'), Some("100"));
//! assert!(opt.flag('v'));
//! assert_eq!(opt.arg(0), Some("out.png"));
//! ```
//!
//! Options are declared once, before any resolution pass. The two
//! resolvers may then run in either order, or not at all; they write the
//! same slots, so the resolver that runs last wins. Resolution never
//! fails: unknown tokens, unmatched config keys, and overflowing
//! positionals are advisory diagnostics on the `log` facade (gated by the
//! verbose toggle), and the corresponding slot is simply left unset.
//! Callers apply their own defaults and required-option checks afterwards.

mod catalog;
mod cmdline;
mod conffile;
mod error;
mod registry;
mod store;
mod usage;

pub use catalog::{OptionKey, OptionKind, Source};
pub use error::{OptionError, Result};

use std::fmt;

use catalog::Catalog;
use registry::{Registry, DEFAULT_CAPACITY, DEFAULT_USAGE_LINES};
use store::ValueStore;

// ============================================================================
// Opt — declaration builder
// ============================================================================

/// A single option declaration, handed to [`AnyOption::declare`].
///
/// The key may be a long name (`"width"`) or a short character (`'w'`); a
/// long name may additionally carry a short alias. Every shape of
/// declaration resolves into exactly one value slot, so a name and its
/// alias always report the same value.
///
/// By default an option matches from both sources; `command_only` and
/// `file_only` narrow that.
#[derive(Debug, Clone)]
pub struct Opt {
    name: Option<String>,
    short: Option<char>,
    kind: OptionKind,
    source: Source,
}

impl Opt {
    /// An option that consumes one textual value.
    pub fn value(key: impl Into<OptionKey>) -> Self {
        Self::with_kind(key.into(), OptionKind::Value)
    }

    /// A boolean-present flag. It never consumes a value.
    pub fn flag(key: impl Into<OptionKey>) -> Self {
        Self::with_kind(key.into(), OptionKind::Flag)
    }

    fn with_kind(key: OptionKey, kind: OptionKind) -> Self {
        let (name, short) = match key {
            OptionKey::Name(n) => (Some(n), None),
            OptionKey::Char(c) => (None, Some(c)),
        };
        Opt {
            name,
            short,
            kind,
            source: Source::Both,
        }
    }

    /// Attach a short-character alias sharing the option's value slot.
    pub fn alias(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    /// Only the command-line resolver may match this option.
    pub fn command_only(mut self) -> Self {
        self.source = Source::CommandLine;
        self
    }

    /// Only the config-file resolver may match this option.
    pub fn file_only(mut self) -> Self {
        self.source = Source::File;
        self
    }
}

// ============================================================================
// AnyOption — the resolution engine
// ============================================================================

/// The option-resolution engine.
///
/// Owns the option catalogs, the shared value slots, the usage text, and a
/// copy of the last processed argument vector. Single-threaded by design:
/// declare everything first, then run resolution passes, then query.
pub struct AnyOption {
    pub(crate) catalog: Catalog,
    pub(crate) store: ValueStore,
    pub(crate) usage: Registry<String>,
    pub(crate) usage_shown: bool,
    /// Owned copy of the argument vector from the last `process_args`.
    pub(crate) argv: Vec<String>,
    /// Indices into `argv` of tokens that matched no declared option.
    pub(crate) positional: Vec<usize>,
    pub(crate) max_args: Option<usize>,
    pub(crate) prefix_char: char,
    pub(crate) long_prefix: String,
    pub(crate) comment_char: char,
    pub(crate) delimiter_char: char,
    pub(crate) whitespace_char: char,
    pub(crate) posix_style: bool,
    pub(crate) verbose: bool,
    pub(crate) auto_usage: bool,
    pub(crate) has_options: bool,
}

impl AnyOption {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY)
    }

    /// Size the catalogs ahead of time. They still grow on demand; the
    /// capacities are starting points, not limits.
    pub fn with_capacity(max_options: usize, max_char_options: usize) -> Self {
        AnyOption {
            catalog: Catalog::with_capacity(max_options, max_char_options),
            store: ValueStore::with_capacity(max_options),
            usage: Registry::with_capacity(DEFAULT_USAGE_LINES),
            usage_shown: false,
            argv: Vec::new(),
            positional: Vec::new(),
            max_args: None,
            prefix_char: '-',
            long_prefix: "--".to_string(),
            comment_char: '#',
            delimiter_char: ':',
            whitespace_char: ' ',
            posix_style: true,
            verbose: false,
            auto_usage: false,
            has_options: false,
        }
    }

    // ------------------------------------------------------------------
    // Declaration
    // ------------------------------------------------------------------

    /// Declare one option.
    ///
    /// Every call consumes exactly one value slot, whatever the shape of
    /// the declaration, so a name entry and its alias share storage. The
    /// only error is storage growth failure, which leaves the engine
    /// unusable for further declarations.
    ///
    /// With POSIX mode switched off, the character part of a declaration
    /// is dropped (with a verbose diagnostic); the slot is consumed
    /// regardless.
    pub fn declare(&mut self, opt: Opt) -> Result<()> {
        let slot = self.store.reserve_slot()?;
        if let Some(name) = opt.name {
            self.catalog.add_name(name, opt.kind, opt.source, slot)?;
        }
        if let Some(c) = opt.short {
            if self.posix_style {
                self.catalog.add_char(c, opt.kind, opt.source, slot)?;
            } else if self.verbose {
                log::warn!(
                    "ignoring the option character '{}' (POSIX options are turned off)",
                    c
                );
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Resolved value of a declared value-option, by name or character.
    ///
    /// `None` means the option never matched during resolution — the
    /// engine does not distinguish "not given" from "not declared".
    pub fn value(&self, key: impl Into<OptionKey>) -> Option<&str> {
        let slot = self.catalog.slot_of(&key.into())?;
        self.store.read(slot)
    }

    /// True iff the flag was switched on by any resolution pass.
    pub fn flag(&self, key: impl Into<OptionKey>) -> bool {
        match self.catalog.slot_of(&key.into()) {
            Some(slot) => self.store.read_flag(slot),
            None => false,
        }
    }

    /// Number of positional arguments retained by the last `process_args`.
    pub fn arg_count(&self) -> usize {
        self.positional.len()
    }

    /// The i-th positional argument, in original argv order.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.positional.get(i).map(|&ix| self.argv[ix].as_str())
    }

    /// All retained positional arguments, in original argv order.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(|&ix| self.argv[ix].as_str())
    }

    /// True once a resolution pass has seen any input: an argv with more
    /// than the program name, or a readable config buffer.
    pub fn has_options(&self) -> bool {
        self.has_options
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Prefix character for short options (default `-`).
    pub fn set_prefix_char(&mut self, c: char) {
        self.prefix_char = c;
    }

    /// Prefix for GNU long options (default `--`).
    pub fn set_long_prefix(&mut self, prefix: &str) {
        self.long_prefix = prefix.to_string();
    }

    /// Full-line comment character for config files (default `#`).
    pub fn set_comment_char(&mut self, c: char) {
        self.comment_char = c;
    }

    /// Key/value delimiter for config files (default `:`).
    pub fn set_delimiter_char(&mut self, c: char) {
        self.delimiter_char = c;
    }

    /// Turn off POSIX short-option clustering. Single-dash tokens are
    /// then parsed as long options with a one-character prefix strip, and
    /// character declarations are ignored.
    pub fn no_posix(&mut self) {
        self.posix_style = false;
    }

    pub fn posix(&self) -> bool {
        self.posix_style
    }

    /// Let resolution diagnostics through to the `log` facade.
    pub fn set_verbose(&mut self) {
        self.verbose = true;
    }

    /// Print the usage text automatically after command-line diagnostics.
    pub fn auto_usage(&mut self, on: bool) {
        self.auto_usage = on;
    }

    /// Cap the number of positional arguments retained; excess tokens are
    /// dropped with a diagnostic. Unset means no cap.
    pub fn set_max_args(&mut self, max: usize) {
        self.max_args = Some(max);
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Emit a resolution diagnostic. Output is gated on the verbose
    /// toggle; the auto-usage hook fires independently of it.
    pub(crate) fn complain(&mut self, message: fmt::Arguments<'_>, show_usage: bool) {
        if self.verbose {
            log::warn!("{}", message);
        }
        if show_usage {
            self.print_auto_usage();
        }
    }
}

impl Default for AnyOption {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_alias_share_one_slot() {
        let mut opt = AnyOption::new();
        opt.declare(Opt::value("width").alias('w')).unwrap();

        opt.process_args(&["prog", "-w", "100"]);
        assert_eq!(opt.value("width"), Some("100"));
        assert_eq!(opt.value('w'), Some("100"));
    }

    #[test]
    fn each_declare_consumes_one_slot() {
        let mut opt = AnyOption::new();
        opt.declare(Opt::value("width").alias('w')).unwrap();
        opt.declare(Opt::value("height").alias('h')).unwrap();

        opt.process_args(&["prog", "-w", "1", "-h", "2"]);
        assert_eq!(opt.value("width"), Some("1"));
        assert_eq!(opt.value("height"), Some("2"));
    }

    #[test]
    fn char_only_declaration() {
        let mut opt = AnyOption::new();
        opt.declare(Opt::value('x')).unwrap();
        opt.process_args(&["prog", "-x", "9"]);
        assert_eq!(opt.value('x'), Some("9"));
        assert_eq!(opt.value("x"), None);
    }

    #[test]
    fn undeclared_keys_query_empty() {
        let opt = AnyOption::new();
        assert_eq!(opt.value("nothing"), None);
        assert!(!opt.flag('z'));
    }

    #[test]
    fn char_declarations_dropped_without_posix() {
        let mut opt = AnyOption::new();
        opt.no_posix();
        opt.declare(Opt::value("width").alias('w')).unwrap();

        opt.process_args(&["prog", "-width", "42"]);
        assert_eq!(opt.value("width"), Some("42"));
        // The alias was never registered.
        assert_eq!(opt.value('w'), None);
    }

    #[test]
    fn defaults() {
        let opt = AnyOption::new();
        assert!(opt.posix());
        assert!(!opt.has_options());
        assert_eq!(opt.arg_count(), 0);
    }

    #[test]
    fn has_options_after_args() {
        let mut opt = AnyOption::new();
        opt.process_args(&["prog"]);
        assert!(!opt.has_options());
        opt.process_args(&["prog", "x"]);
        assert!(opt.has_options());
    }
}
