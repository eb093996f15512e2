//! Command-line resolution.
//!
//! Classifies each argv token as a GNU long option, a POSIX short-option
//! cluster, or a positional argument, matches it against the catalogs, and
//! writes into the shared value slots. Matching never fails the pass:
//! unknown tokens get a verbose diagnostic (plus the auto-usage hook) and
//! their slots stay unset.

use crate::catalog::{OptionKind, Source};
use crate::AnyOption;

impl AnyOption {
    /// Resolve options from a full argument vector.
    ///
    /// `argv[0]` is the program name and is never matched. May be combined
    /// with [`AnyOption::process_file`] or [`AnyOption::process_buffer`]
    /// in either order; both resolvers write the same slots, so whichever
    /// runs last wins.
    pub fn process_args<S: AsRef<str>>(&mut self, argv: &[S]) {
        self.argv = argv.iter().map(|a| a.as_ref().to_string()).collect();
        self.positional.clear();
        if self.argv.len() > 1 {
            self.has_options = true;
        }

        let mut i = 1;
        while i < self.argv.len() {
            let token = self.argv[i].clone();
            if !self.long_prefix.is_empty() && token.starts_with(&self.long_prefix) {
                let body = token[self.long_prefix.len()..].to_string();
                i = self.parse_long(&body, i);
            } else if token.starts_with(self.prefix_char) {
                let body = token[self.prefix_char.len_utf8()..].to_string();
                if self.posix_style {
                    i = self.parse_posix_cluster(&body, i);
                } else {
                    i = self.parse_long(&body, i);
                }
            } else {
                self.keep_positional(i, &token);
            }
            i += 1;
        }
    }

    /// GNU long-option form, prefix already stripped: `name` or
    /// `name=value`. Returns the index of the last token consumed.
    fn parse_long(&mut self, body: &str, at: usize) -> usize {
        if let Some(eq) = body.find('=') {
            let key = &body[..eq];
            let inline = body[eq + 1..].to_string();
            let hit = self
                .catalog
                .match_name(key, Source::CommandLine)
                .map(|e| (e.slot, e.kind));
            match hit {
                Some((slot, OptionKind::Value)) => self.store.write(slot, &inline),
                // A flag given in `=` form: the flag goes on, the value
                // part is ignored.
                Some((slot, OptionKind::Flag)) => self.store.write_flag(slot),
                None => {
                    self.complain(
                        format_args!("unknown command argument option: {}", body),
                        true,
                    );
                }
            }
            return at;
        }

        let hit = self
            .catalog
            .match_name(body, Source::CommandLine)
            .map(|e| (e.slot, e.kind));
        match hit {
            Some((slot, OptionKind::Value)) => {
                if at + 1 < self.argv.len() {
                    let value = self.argv[at + 1].clone();
                    self.store.write(slot, &value);
                    return at + 1;
                }
                // Final token: there is nothing to consume, so the slot
                // stays unset.
                self.complain(format_args!("option {} is missing a value", body), false);
                at
            }
            Some((slot, OptionKind::Flag)) => {
                self.store.write_flag(slot);
                at
            }
            None => {
                self.complain(
                    format_args!("unknown command argument option: {}", body),
                    true,
                );
                at
            }
        }
    }

    /// POSIX short-option cluster, prefix already stripped. Flag matches
    /// keep the scan going, a value-option match ends it, an unmatched
    /// character aborts the whole token. Returns the index of the last
    /// token consumed.
    fn parse_posix_cluster(&mut self, body: &str, at: usize) -> usize {
        if body.is_empty() {
            let prefix = self.prefix_char;
            self.complain(
                format_args!("unknown command argument option: {}", prefix),
                true,
            );
            return at;
        }

        for (pos, c) in body.char_indices() {
            let hit = self
                .catalog
                .match_char(c, Source::CommandLine)
                .map(|e| (e.slot, e.kind));
            match hit {
                Some((slot, OptionKind::Flag)) => {
                    // Clusters like -xyz switch several flags on.
                    self.store.write_flag(slot);
                }
                Some((slot, OptionKind::Value)) => {
                    let rest = &body[pos + c.len_utf8()..];
                    if rest.is_empty() {
                        if at + 1 < self.argv.len() {
                            let value = self.argv[at + 1].clone();
                            self.store.write(slot, &value);
                            return at + 1;
                        }
                        self.complain(format_args!("option -{} is missing a value", c), false);
                        return at;
                    }
                    // Inline value in the same token, with any `=` or
                    // whitespace padding skipped.
                    let ws = self.whitespace_char;
                    let inline = rest
                        .trim_start_matches(|ch: char| ch == ws || ch == '=')
                        .to_string();
                    self.store.write(slot, &inline);
                    return at;
                }
                None => {
                    self.complain(format_args!("unknown command argument option: {}", c), true);
                    return at;
                }
            }
        }
        at
    }

    /// Remember a non-option token by its original argv index, dropping it
    /// once the configured cap is reached.
    fn keep_positional(&mut self, index: usize, token: &str) {
        let cap = self.max_args.unwrap_or(usize::MAX);
        if self.positional.len() < cap {
            self.positional.push(index);
        } else {
            self.complain(format_args!("ignoring extra argument: {}", token), true);
        }
    }
}
