//! Character-array and marking field copy rules.

/// Writes `text` into `out` as a char-array field capped at `cap` bytes.
///
/// Matches the federation string field rules: shorter values are written
/// whole (plus a terminator when `add_null`), a value exactly filling the
/// field loses its last character to the terminator, and longer values are
/// truncated with no terminator. Returns the number of bytes the field
/// occupies on the wire.
pub(crate) fn write_char_array(out: &mut [u8], cap: usize, text: &str, add_null: bool) -> usize {
    let bytes = text.as_bytes();
    let mut write_size = bytes.len();
    let total = if cap > 0 && bytes.len() == cap && add_null {
        write_size -= 1;
        cap
    } else if bytes.len() < cap {
        bytes.len() + usize::from(add_null)
    } else {
        cap
    };

    for (i, slot) in out.iter_mut().enumerate().take(total) {
        *slot = if i < write_size { bytes[i] } else { 0 };
    }
    total
}

/// Reads a char-array field back into a string.
///
/// Stops at the first NUL when `stop_at_null`; otherwise consumes the whole
/// buffer (octet fields carry raw bytes with no terminator).
pub(crate) fn read_char_array(bytes: &[u8], stop_at_null: bool) -> String {
    let end = if stop_at_null {
        bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
    } else {
        bytes.len()
    };
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Writes a marking field: charset code byte (1 = ASCII) followed by up to
/// `len - 1` characters, zero-filled. Always occupies `len` bytes.
pub(crate) fn write_marking(out: &mut [u8], len: usize, text: &str) -> usize {
    let bytes = text.as_bytes();
    out[0] = 1;
    for i in 1..len {
        out[i] = if i <= bytes.len() { bytes[i - 1] } else { 0 };
    }
    len
}

/// Reads a marking field, skipping the charset code byte and stopping at
/// the first NUL.
pub(crate) fn read_marking(bytes: &[u8], len: usize) -> String {
    if bytes.len() < 2 {
        return String::new();
    }
    let field = &bytes[1..len.min(bytes.len())];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
