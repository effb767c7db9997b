//! Seeded string hash used to make corpus generation reproducible.
//!
//! 32-bit FNV-1a over UTF-16 code units. Hashing code units rather than
//! bytes keeps results identical to implementations that iterate a string
//! by UTF-16 unit (as browser engines do).

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash a string to a reproducible unsigned 32-bit integer.
pub fn fnv1a_32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn document_ids() {
        assert_eq!(fnv1a_32("DOC-0001"), 3_292_787_547);
        assert_eq!(fnv1a_32("DOC-0002"), 3_309_565_166);
        assert_eq!(fnv1a_32("DOC-0020"), 1_330_203_482);
    }

    #[test]
    fn hashes_utf16_code_units() {
        // U+1F600 is a surrogate pair, so it contributes two code units.
        let expected = [0xD83Du32, 0xDE00]
            .iter()
            .fold(FNV_OFFSET_BASIS, |h, u| (h ^ u).wrapping_mul(FNV_PRIME));
        assert_eq!(fnv1a_32("\u{1F600}"), expected);
    }
}
