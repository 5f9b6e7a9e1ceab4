//! Blocking line reads for prompts.

use std::io::{self, BufRead};

/// Read one line; `true` only when its first byte is `y` or `Y`.
///
/// The rest of the line (including the newline) is consumed and discarded
/// without decoding, so any byte sequence answers the prompt. EOF and empty
/// input read as `false`.
pub fn read_bool<R: BufRead + ?Sized>(input: &mut R) -> io::Result<bool> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(matches!(line.first(), Some(b'y' | b'Y')))
}

/// Read one line without its terminator. EOF yields an empty string;
/// invalid UTF-8 is replaced rather than rejected.
pub fn read_string<R: BufRead + ?Sized>(input: &mut R) -> io::Result<String> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_bool_accepts_either_case_y() {
        assert!(read_bool(&mut Cursor::new("y\n")).unwrap());
        assert!(read_bool(&mut Cursor::new("Yes please\n")).unwrap());
    }

    #[test]
    fn read_bool_rejects_everything_else() {
        assert!(!read_bool(&mut Cursor::new("n\n")).unwrap());
        assert!(!read_bool(&mut Cursor::new("")).unwrap());
        assert!(!read_bool(&mut Cursor::new(" y\n")).unwrap());
    }

    #[test]
    fn read_bool_discards_rest_of_line_only() {
        let mut input = Cursor::new("yikes\nnext\n");
        assert!(read_bool(&mut input).unwrap());
        assert_eq!(read_string(&mut input).unwrap(), "next");
    }

    #[test]
    fn read_string_strips_crlf() {
        assert_eq!(read_string(&mut Cursor::new("name\r\n")).unwrap(), "name");
        assert_eq!(read_string(&mut Cursor::new("tail")).unwrap(), "tail");
        assert_eq!(read_string(&mut Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn read_bool_answers_non_utf8_lines() {
        let mut input = Cursor::new(b"y\xff\nnext\n".to_vec());
        assert!(read_bool(&mut input).unwrap());
        assert_eq!(read_string(&mut input).unwrap(), "next");
        assert!(!read_bool(&mut Cursor::new(b"\xe9\n".to_vec())).unwrap());
    }

    #[test]
    fn read_string_replaces_invalid_utf8() {
        let text = read_string(&mut Cursor::new(b"caf\xe9\r\n".to_vec())).unwrap();
        assert_eq!(text, "caf\u{fffd}");
    }
}
