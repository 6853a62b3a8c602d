//! Print
//!
//! `print` writes the display forms of its arguments separated by single
//! spaces and followed by a newline, the way a compiled `print(a, b, c)`
//! statement expects. The line is assembled first and written with one
//! call, so a line is never interleaved with another writer's output
//! mid-way.

use dynval_core::format::display;
use dynval_core::value::Value;
use std::io::{self, Write};

/// Write one print line for `args` to `out`
pub fn print_values<W: Write>(out: &mut W, args: &[Value]) -> io::Result<()> {
    let mut line = args.iter().map(display).collect::<Vec<_>>().join(" ");
    line.push('\n');
    out.write_all(line.as_bytes())
}

/// Write one print line for `args` to stdout
pub fn print(args: &[Value]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_values(&mut handle, args)?;
    handle.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(args: &[Value]) -> String {
        let mut buf = Vec::new();
        print_values(&mut buf, args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_joins_with_spaces() {
        let line = printed(&[Value::from("x ="), Value::Int(3), Value::Float(0.5)]);
        assert_eq!(line, "x = 3 0.5\n");
    }

    #[test]
    fn test_print_nested_strings_quoted() {
        let line = printed(&[Value::array(vec![Value::from("a")]), Value::from("a")]);
        assert_eq!(line, "['a'] a\n");
    }

    #[test]
    fn test_print_no_args() {
        assert_eq!(printed(&[]), "\n");
    }
}
