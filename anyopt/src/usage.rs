//! Usage-text accumulation and printing.
//!
//! The engine never generates usage text itself; callers add the lines
//! they want shown and the resolvers fire the auto-usage hook after
//! command-line diagnostics. The whole block prints at most once per
//! engine, so a stream of bad tokens does not repeat it.

use std::io::{self, Write};

use crate::error::Result;
use crate::AnyOption;

impl AnyOption {
    /// Append one line of usage text.
    pub fn add_usage(&mut self, line: &str) -> Result<()> {
        self.usage.append(line.to_string())?;
        Ok(())
    }

    /// Print the accumulated usage text to stdout, at most once.
    pub fn print_usage(&mut self) {
        if self.usage_shown {
            return;
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = self.write_usage(&mut out);
    }

    /// Write the usage text to `out`, honoring the print-once latch.
    pub fn write_usage<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.usage_shown {
            return Ok(());
        }
        self.usage_shown = true;
        write!(out, "\n")?;
        for line in self.usage.iter() {
            write!(out, "{}\n", line)?;
        }
        write!(out, "\n")
    }

    /// Hook fired after command-line diagnostics.
    pub(crate) fn print_auto_usage(&mut self) {
        if self.auto_usage {
            self.print_usage();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AnyOption, Opt};

    #[test]
    fn write_usage_frames_lines_with_blanks() {
        let mut opt = AnyOption::new();
        opt.add_usage("usage: demo [options]").unwrap();
        opt.add_usage("  -w NUM   output width").unwrap();

        let mut out = Vec::new();
        opt.write_usage(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nusage: demo [options]\n  -w NUM   output width\n\n"
        );
    }

    #[test]
    fn usage_prints_at_most_once() {
        let mut opt = AnyOption::new();
        opt.add_usage("usage: demo").unwrap();

        let mut first = Vec::new();
        opt.write_usage(&mut first).unwrap();
        assert!(!first.is_empty());

        let mut second = Vec::new();
        opt.write_usage(&mut second).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn auto_usage_latches_after_a_diagnostic() {
        let mut opt = AnyOption::new();
        opt.auto_usage(true);
        opt.add_usage("usage: demo").unwrap();
        opt.declare(Opt::flag("all")).unwrap();

        // The unknown option fires the hook, which consumes the latch.
        opt.process_args(&["prog", "--bogus"]);
        let mut out = Vec::new();
        opt.write_usage(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn without_auto_usage_nothing_latches() {
        let mut opt = AnyOption::new();
        opt.add_usage("usage: demo").unwrap();
        opt.declare(Opt::flag("all")).unwrap();

        opt.process_args(&["prog", "--bogus"]);
        let mut out = Vec::new();
        opt.write_usage(&mut out).unwrap();
        assert!(!out.is_empty());
    }
}
