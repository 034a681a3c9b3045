//! Seat-code codec
//!
//! A seat code is the human-readable seat identifier used at every external
//! boundary: one uppercase row letter followed by an exactly-two-digit
//! 1-based column number, e.g. `A01` or `C12`.  Internal logic works on
//! [`SeatPos`] values; the string form exists only here.

use super::grid::SeatPos;

/// Decode a seat code into a position.
///
/// Purely syntactic: returns `None` for anything not matching `^[A-Z]\d{2}$`
/// (wrong length, lowercase letter, non-digit, column `00`).  Bounds against
/// an actual grid are the caller's concern.
pub fn decode(code: &str) -> Option<SeatPos> {
    let bytes = code.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    let (letter, tens, ones) = (bytes[0], bytes[1], bytes[2]);
    if !letter.is_ascii_uppercase() || !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return None;
    }

    let column = (tens - b'0') as usize * 10 + (ones - b'0') as usize;
    if column == 0 {
        // Columns are 1-based, so "A00" is malformed
        return None;
    }

    Some(SeatPos {
        row: (letter - b'A') as usize,
        col: column - 1,
    })
}

/// Format a position as a seat code.
///
/// The inverse of [`decode`] for every position a grid can hold (row < 26,
/// col < 99).
pub fn encode(pos: SeatPos) -> String {
    format!("{}{:02}", (b'A' + pos.row as u8) as char, pos.col + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_codes() {
        assert_eq!(decode("A01"), Some(SeatPos { row: 0, col: 0 }));
        assert_eq!(decode("B03"), Some(SeatPos { row: 1, col: 2 }));
        assert_eq!(decode("Z50"), Some(SeatPos { row: 25, col: 49 }));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("A1"), None); // one digit
        assert_eq!(decode("A001"), None); // three digits
        assert_eq!(decode("a01"), None); // lowercase row
        assert_eq!(decode("AA1"), None); // letter where a digit belongs
        assert_eq!(decode("1A0"), None); // digit where the letter belongs
        assert_eq!(decode("A00"), None); // columns are 1-based
        assert_eq!(decode("A0x"), None);
    }

    #[test]
    fn rejects_non_ascii_input() {
        // multi-byte chars must not slip through the byte-length check
        assert_eq!(decode("Ä01"), None);
        assert_eq!(decode("A¹2"), None);
    }

    #[test]
    fn encode_round_trips() {
        for pos in [
            SeatPos { row: 0, col: 0 },
            SeatPos { row: 3, col: 9 },
            SeatPos { row: 25, col: 49 },
        ] {
            assert_eq!(decode(&encode(pos)), Some(pos));
        }
        assert_eq!(encode(SeatPos { row: 0, col: 4 }), "A05");
    }
}
