/// Returns the number of bytes in `haystack` equal to `needle`.
///
/// Every byte is visited exactly once and the scan never stops early, so the
/// cost is linear in `haystack.len()`. The result is at most
/// `haystack.len()`; an empty slice yields `0`.
///
/// ```
/// assert_eq!(bytealg::count(&[0x41, 0x42, 0x41], 0x41), 2);
/// ```
pub const fn count(haystack: &[u8], needle: u8) -> usize {
    let mut n = 0;
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i] == needle {
            n += 1;
        }
        i += 1;
    }
    n
}

/// Returns the number of bytes in `haystack` equal to `needle`.
///
/// The text is scanned by byte index, not by `char`: a needle such as
/// `0xC3` matches the lead byte of `"é"`. Always equal to
/// `count(haystack.as_bytes(), needle)`.
///
/// ```
/// assert_eq!(bytealg::count_str("banana", b'a'), 3);
/// ```
pub const fn count_str(haystack: &str, needle: u8) -> usize {
    count(haystack.as_bytes(), needle)
}
