//! Case mapping over the code point ranges Vietnamese text uses: ASCII,
//! Latin-1, Latin Extended-A/B and Latin Extended Additional. Outside those
//! ranges characters pass through unchanged.

const fn map(c: char, code: u32) -> char {
    match char::from_u32(code) {
        Some(mapped) => mapped,
        None => c,
    }
}

pub const fn to_upper(c: char) -> char {
    let code = c as u32;
    let folded = code & !32;
    if folded >= 'A' as u32 && folded <= 'Z' as u32 {
        return map(c, folded);
    }
    if code >= 0xe0 && code <= 0xfe {
        return map(c, folded);
    }
    // ư and Ư sit on an odd/even boundary
    if code >= 0x1af && code <= 0x1b0 {
        return 'Ư';
    }
    let folded = code & !1;
    if (code >= 0x100 && code <= 0x1bf) || (code >= 0x1ea0 && code <= 0x1ef9) {
        return map(c, folded);
    }
    c
}

pub const fn to_lower(c: char) -> char {
    let code = c as u32;
    let folded = code | 32;
    if folded >= 'a' as u32 && folded <= 'z' as u32 {
        return map(c, folded);
    }
    if code >= 0xc0 && code <= 0xde {
        return map(c, folded);
    }
    if code >= 0x1af && code <= 0x1b0 {
        return 'ư';
    }
    let folded = code | 1;
    if (code >= 0x100 && code <= 0x1bf) || (code >= 0x1ea0 && code <= 0x1ef9) {
        return map(c, folded);
    }
    c
}

/// Lowercases `c` and reports whether it was uppercase.
#[inline]
pub const fn fold_case(c: char) -> (char, bool) {
    let lower = to_lower(c);
    (lower, lower != c)
}
