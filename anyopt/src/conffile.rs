//! Config-file resolution.
//!
//! Splits a raw buffer into comment-filtered lines, classifies each line
//! as a `key : value` pair or a bare flag, and resolves through the same
//! catalogs and value slots as the command-line resolver. Only options
//! whose role admits the file source may match here.
//!
//! The format is deliberately narrow: line-oriented, full-line comments
//! only, a single delimiter character, no quoting or escaping, and
//! whitespace trimming limited to one configured character (ASCII space by
//! default — tabs survive).

use std::fs;
use std::path::Path;

use crate::catalog::{OptionKind, Source};
use crate::AnyOption;

/// The single character of a one-character key, if it is one.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl AnyOption {
    /// Resolve options from a configuration file.
    ///
    /// A missing or unreadable file is not an error: the pass resolves
    /// nothing and returns `false`.
    pub fn process_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let buffer = match fs::read_to_string(path) {
            Ok(buffer) => buffer,
            Err(err) => {
                self.complain(
                    format_args!("no options resolved from {}: {}", path.display(), err),
                    false,
                );
                return false;
            }
        };
        self.process_buffer(&buffer);
        true
    }

    /// Resolve options from raw configuration text.
    pub fn process_buffer(&mut self, buffer: &str) {
        for line in buffer.split('\n') {
            if line.is_empty() || line.starts_with(self.comment_char) {
                continue;
            }
            self.classify_line(line);
        }
        self.has_options = true;
    }

    /// A retained line is a pair only if it has an interior delimiter: a
    /// delimiter as the first or last character demotes the whole line to
    /// flag classification.
    fn classify_line(&mut self, line: &str) {
        let delim = self.delimiter_char;
        let first = line.chars().next();
        let last = line.chars().last();
        if first == Some(delim) || last == Some(delim) {
            self.bare_flag(line);
            return;
        }

        let last_start = line.len() - last.map(|c| c.len_utf8()).unwrap_or(0);
        let split = line
            .char_indices()
            .skip(1)
            .find(|&(i, c)| c == delim && i < last_start)
            .map(|(i, _)| i);
        match split {
            Some(i) => {
                let key = line[..i].to_string();
                let value = line[i + delim.len_utf8()..].to_string();
                self.value_pair(&key, &value);
            }
            None => self.bare_flag(line),
        }
    }

    /// `key : value` line. Only value options whose role admits the file
    /// source may match; a one-character key tries the char catalog first,
    /// then falls back to the name catalog.
    fn value_pair(&mut self, key: &str, value: &str) {
        let key = self.chomp(key).to_string();
        let value = self.chomp(value).to_string();

        let mut hit = None;
        if let Some(c) = single_char(&key) {
            hit = self
                .catalog
                .match_char_kind(c, Source::File, OptionKind::Value)
                .map(|e| e.slot);
        }
        if hit.is_none() {
            hit = self
                .catalog
                .match_name_kind(&key, Source::File, OptionKind::Value)
                .map(|e| e.slot);
        }
        match hit {
            Some(slot) => self.store.write(slot, &value),
            None => self.complain(
                format_args!("unknown option in resource file: {}", key),
                false,
            ),
        }
    }

    /// A line with no usable pair is a bare flag token.
    fn bare_flag(&mut self, line: &str) {
        let key = self.chomp(line).to_string();

        let mut hit = None;
        if let Some(c) = single_char(&key) {
            hit = self
                .catalog
                .match_char_kind(c, Source::File, OptionKind::Flag)
                .map(|e| e.slot);
        }
        if hit.is_none() {
            hit = self
                .catalog
                .match_name_kind(&key, Source::File, OptionKind::Flag)
                .map(|e| e.slot);
        }
        match hit {
            Some(slot) => self.store.write_flag(slot),
            None => self.complain(
                format_args!("unknown option in resource file: {}", key),
                false,
            ),
        }
    }

    /// Strip leading and trailing copies of the configured whitespace
    /// character — only that character. Tabs and other whitespace are
    /// part of the token.
    fn chomp<'a>(&self, s: &'a str) -> &'a str {
        s.trim_matches(self.whitespace_char)
    }
}
