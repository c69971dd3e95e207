//! Example Helper
//!
//! Demonstrates the shape of a skill script: one function, fixed output,
//! a success flag.

use std::io::Write;

/// Lines printed by the example, in output order
pub const EXAMPLE_LINES: [&str; 2] = [
    "This is an example helper script",
    "You can include any utility code here",
];

/// Example function to demonstrate skill script structure.
///
/// Prints [`EXAMPLE_LINES`] to stdout and returns `true`.
pub fn example_function() -> bool {
    for line in EXAMPLE_LINES {
        println!("{}", line);
    }
    true
}

/// Write the example lines to `out` and flush it.
///
/// Same output as [`example_function`], but a closed or failing writer
/// surfaces as [`crate::Error::Io`] instead of a panic.
pub fn write_example<W: Write>(out: &mut W) -> crate::Result<bool> {
    for line in EXAMPLE_LINES {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Writer that rejects every write
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_example_function_returns_true() {
        assert!(example_function());
    }

    #[test]
    fn test_write_example_exact_output() {
        let mut buf = Vec::new();
        let ok = write_example(&mut buf).unwrap();

        assert!(ok);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "This is an example helper script\nYou can include any utility code here\n"
        );
    }

    #[test]
    fn test_write_example_line_order() {
        let mut buf = Vec::new();
        write_example(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, EXAMPLE_LINES);
    }

    #[test]
    fn test_write_example_is_idempotent() {
        let mut first = Vec::new();
        let mut second = Vec::new();

        assert!(write_example(&mut first).unwrap());
        assert!(write_example(&mut second).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_example_appends_without_state() {
        let mut buf = Vec::new();
        write_example(&mut buf).unwrap();
        write_example(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().nth(2), Some(EXAMPLE_LINES[0]));
    }

    #[test]
    fn test_write_example_closed_pipe() {
        let result = write_example(&mut ClosedPipe);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
