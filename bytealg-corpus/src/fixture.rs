use core::fmt;
use core::str::FromStr;

use heapless::String;

/// A hand-written counting case.
///
/// ```text
/// count 0x61 = 3
/// banana
/// ```
///
/// The first line names the needle, either as `0xHH` or as a quoted
/// single-byte character such as `'a'`, and the expected count. Everything
/// after it is the body; a single trailing newline is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture<const N: usize> {
    needle: u8,
    expected: usize,
    body: String<N>,
}

impl<const N: usize> Fixture<N> {
    pub fn needle(&self) -> u8 {
        self.needle
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFixtureErrorKind {
    MissingHeader,
    MalformedHeader,
    InvalidNeedle,
    InvalidCount,
    CapacityExceeded { capacity: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFixtureError {
    kind: ParseFixtureErrorKind,
    line: usize,
}

impl ParseFixtureError {
    fn new(kind: ParseFixtureErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn kind(&self) -> ParseFixtureErrorKind {
        self.kind
    }

    /// Zero-based line the error was found on.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for ParseFixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, ", self.line + 1)?;
        match self.kind {
            ParseFixtureErrorKind::MissingHeader => write!(f, "header is missing."),
            ParseFixtureErrorKind::MalformedHeader => {
                write!(f, "header must be `count <needle> = <expected>`.")
            }
            ParseFixtureErrorKind::InvalidNeedle => {
                write!(f, "needle must be `0xHH` or a quoted single-byte character.")
            }
            ParseFixtureErrorKind::InvalidCount => {
                write!(f, "expected count must be a non-negative integer.")
            }
            ParseFixtureErrorKind::CapacityExceeded { capacity } => {
                write!(f, "body is longer than {} bytes.", capacity)
            }
        }
    }
}

fn parse_needle(s: &str) -> Option<u8> {
    if let Some(hex) = s.strip_prefix("0x") {
        return u8::from_str_radix(hex, 16).ok();
    }
    let quoted = s.strip_prefix('\'')?.strip_suffix('\'')?;
    match quoted.as_bytes() {
        [byte] => Some(*byte),
        _ => None,
    }
}

impl<const N: usize> FromStr for Fixture<N> {
    type Err = ParseFixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseFixtureErrorKind::*;

        let (header, body) = s.split_once('\n').unwrap_or((s, ""));
        let header = header.trim_end();
        if header.is_empty() {
            return Err(ParseFixtureError::new(MissingHeader, 0));
        }

        let (needle, expected) = header
            .strip_prefix("count ")
            .and_then(|rest| rest.split_once(" = "))
            .ok_or_else(|| ParseFixtureError::new(MalformedHeader, 0))?;
        let needle =
            parse_needle(needle.trim()).ok_or_else(|| ParseFixtureError::new(InvalidNeedle, 0))?;
        let expected = expected
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseFixtureError::new(InvalidCount, 0))?;

        let body = body.strip_suffix('\n').unwrap_or(body);
        let mut buf = String::new();
        buf.push_str(body)
            .map_err(|_| ParseFixtureError::new(CapacityExceeded { capacity: N }, 1))?;

        Ok(Self {
            needle,
            expected,
            body: buf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let test_cases = vec![
            ("count 0x61 = 3\nbanana\n", (b'a', 3, "banana")),
            ("count 'a' = 3\nbanana", (b'a', 3, "banana")),
            ("count 0x0a = 2\none\ntwo\n\n", (b'\n', 2, "one\ntwo\n")),
            ("count 'x' = 0\n", (b'x', 0, "")),
            ("count 'x' = 0", (b'x', 0, "")),
            ("count 0xC3 = 1\ncafé\n", (0xc3, 1, "café")),
            ("count ''' = 1\nit's\n", (b'\'', 1, "it's")),
        ];

        for (input, (needle, expected, body)) in test_cases {
            let fixture = input.parse::<Fixture<64>>().unwrap();
            assert_eq!(fixture.needle(), needle);
            assert_eq!(fixture.expected(), expected);
            assert_eq!(fixture.body(), body);
        }
    }

    #[test]
    fn test_parse_error() {
        use ParseFixtureErrorKind::*;

        let test_cases = vec![
            ("", ParseFixtureError::new(MissingHeader, 0)),
            ("\nbanana", ParseFixtureError::new(MissingHeader, 0)),
            ("banana\n", ParseFixtureError::new(MalformedHeader, 0)),
            ("count 'a' 3\n", ParseFixtureError::new(MalformedHeader, 0)),
            ("count 0x100 = 1\n", ParseFixtureError::new(InvalidNeedle, 0)),
            ("count 'é' = 1\n", ParseFixtureError::new(InvalidNeedle, 0)),
            ("count a = 1\n", ParseFixtureError::new(InvalidNeedle, 0)),
            ("count 'a' = -1\n", ParseFixtureError::new(InvalidCount, 0)),
            (
                "count 'a' = 1\n0123456789abcdefg\n",
                ParseFixtureError::new(CapacityExceeded { capacity: 16 }, 1),
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(input.parse::<Fixture<16>>(), Err(expected), "{:?}", input);
        }
    }

    #[test]
    fn test_display() {
        let err = "count a = 1\n".parse::<Fixture<16>>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1, needle must be `0xHH` or a quoted single-byte character."
        );
    }
}
