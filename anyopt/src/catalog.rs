//! Declared-option bookkeeping.
//!
//! Two independent tables, one keyed by long name and one by short
//! character, both growing in declaration order. An option declared with a
//! name and a character alias gets one entry in each table, sharing a
//! single value slot. Lookups are linear scans from index 0, so the
//! first-declared entry always wins on duplicate keys.

use std::fmt;

use crate::error::Result;
use crate::registry::{Registry, DEFAULT_CAPACITY};

/// A lookup key: a GNU-style long name or a POSIX short character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKey {
    Name(String),
    Char(char),
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        OptionKey::Name(s.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(s: String) -> Self {
        OptionKey::Name(s)
    }
}

impl From<char> for OptionKey {
    fn from(c: char) -> Self {
        OptionKey::Char(c)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Name(s) => write!(f, "{}", s),
            OptionKey::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Whether an option consumes a value or is boolean-present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Value,
    Flag,
}

/// Which resolver may match an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    CommandLine,
    File,
    Both,
}

impl Source {
    /// True if an option declared with this source may be matched by the
    /// resolver reading from `from`.
    pub(crate) fn admits(self, from: Source) -> bool {
        self == Source::Both || self == from
    }
}

#[derive(Debug)]
pub(crate) struct CatalogEntry<K> {
    pub key: K,
    pub kind: OptionKind,
    pub source: Source,
    pub slot: usize,
}

#[derive(Debug)]
pub(crate) struct Catalog {
    names: Registry<CatalogEntry<String>>,
    chars: Registry<CatalogEntry<char>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(max_names: usize, max_chars: usize) -> Self {
        Catalog {
            names: Registry::with_capacity(max_names),
            chars: Registry::with_capacity(max_chars),
        }
    }

    pub fn add_name(
        &mut self,
        name: String,
        kind: OptionKind,
        source: Source,
        slot: usize,
    ) -> Result<()> {
        self.names.append(CatalogEntry {
            key: name,
            kind,
            source,
            slot,
        })?;
        Ok(())
    }

    pub fn add_char(
        &mut self,
        c: char,
        kind: OptionKind,
        source: Source,
        slot: usize,
    ) -> Result<()> {
        self.chars.append(CatalogEntry {
            key: c,
            kind,
            source,
            slot,
        })?;
        Ok(())
    }

    /// First name entry matching `key` that the `from` resolver may use,
    /// whatever its kind.
    pub fn match_name(&self, key: &str, from: Source) -> Option<&CatalogEntry<String>> {
        self.names
            .iter()
            .find(|e| e.key == key && e.source.admits(from))
    }

    /// First name entry matching `key`, `from`, and `kind`.
    pub fn match_name_kind(
        &self,
        key: &str,
        from: Source,
        kind: OptionKind,
    ) -> Option<&CatalogEntry<String>> {
        self.names
            .iter()
            .find(|e| e.key == key && e.kind == kind && e.source.admits(from))
    }

    /// First char entry matching `c` that the `from` resolver may use.
    pub fn match_char(&self, c: char, from: Source) -> Option<&CatalogEntry<char>> {
        self.chars
            .iter()
            .find(|e| e.key == c && e.source.admits(from))
    }

    /// First char entry matching `c`, `from`, and `kind`.
    pub fn match_char_kind(
        &self,
        c: char,
        from: Source,
        kind: OptionKind,
    ) -> Option<&CatalogEntry<char>> {
        self.chars
            .iter()
            .find(|e| e.key == c && e.kind == kind && e.source.admits(from))
    }

    /// Slot for a query key, ignoring roles: queries see every declared
    /// option, whichever source it resolves from.
    pub fn slot_of(&self, key: &OptionKey) -> Option<usize> {
        match key {
            OptionKey::Name(name) => self.names.iter().find(|e| &e.key == name).map(|e| e.slot),
            OptionKey::Char(c) => self.chars.iter().find(|e| e.key == *c).map(|e| e.slot),
        }
    }
}
