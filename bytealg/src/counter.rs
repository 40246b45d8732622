use crate::scan;

/// Counts occurrences of a byte.
///
/// Implementors only provide [`Count::count`]; [`Count::count_str`] forwards
/// the text's raw bytes so both entry points always agree.
///
/// Any `Fn(&[u8], u8) -> usize` is a `Count`, which lets a caller hand in an
/// accelerated routine selected elsewhere:
///
/// ```
/// use bytealg::{Count, Generic};
///
/// fn newlines<C: Count>(counter: &C, text: &str) -> usize {
///     counter.count_str(text, b'\n')
/// }
///
/// let iterator = |haystack: &[u8], needle: u8| haystack.iter().filter(|&&b| b == needle).count();
/// assert_eq!(newlines(&Generic, "a\nb\n"), 2);
/// assert_eq!(newlines(&iterator, "a\nb\n"), 2);
/// ```
pub trait Count {
    fn count(&self, haystack: &[u8], needle: u8) -> usize;

    fn count_str(&self, haystack: &str, needle: u8) -> usize {
        self.count(haystack.as_bytes(), needle)
    }
}

/// The portable scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generic;

impl Count for Generic {
    #[inline]
    fn count(&self, haystack: &[u8], needle: u8) -> usize {
        scan::count(haystack, needle)
    }

    #[inline]
    fn count_str(&self, haystack: &str, needle: u8) -> usize {
        scan::count_str(haystack, needle)
    }
}

impl<F> Count for F
where
    F: Fn(&[u8], u8) -> usize,
{
    #[inline]
    fn count(&self, haystack: &[u8], needle: u8) -> usize {
        self(haystack, needle)
    }
}
