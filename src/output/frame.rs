//! Two-units-per-byte serialization for shift-register transport.

use heapless::Vec;

use super::signal::ActuationSignal;

/// Packed coil nibbles: unit `2k` in the low nibble of byte `k`, unit
/// `2k + 1` in the high nibble. An odd last unit leaves its high nibble clear.
pub fn pack<const N: usize>(signals: &[ActuationSignal; N]) -> Vec<u8, N> {
    let mut frame = Vec::new();
    for pair in signals.chunks(2) {
        let low = pair[0].nibble();
        let high = pair.get(1).map_or(0, |s| s.nibble());
        // Cannot fail: ceil(N / 2) <= N
        let _ = frame.push(low | (high << 4));
    }
    frame
}

/// Nibble driven onto `unit`, read back from a packed frame.
pub fn unit_nibble(frame: &[u8], unit: usize) -> Option<u8> {
    let byte = frame.get(unit / 2)?;
    Some(if unit % 2 == 0 { byte & 0x0F } else { byte >> 4 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(pattern: u8) -> ActuationSignal {
        ActuationSignal {
            energized: true,
            pattern,
        }
    }

    #[test]
    fn test_even_row() {
        let frame = pack(&[on(0b0011), on(0b1001), ActuationSignal::OFF, on(0b0110)]);
        assert_eq!(&frame[..], &[0x93, 0x60]);
    }

    #[test]
    fn test_odd_row_leaves_high_nibble_clear() {
        let frame = pack(&[on(0b1100), on(0b0011), on(0b0110)]);
        assert_eq!(&frame[..], &[0x3C, 0x06]);
        assert_eq!(unit_nibble(&frame, 2), Some(0b0110));
        assert_eq!(unit_nibble(&frame, 3), Some(0));
        assert_eq!(unit_nibble(&frame, 4), None);
    }

    #[test]
    fn test_de_energized_pattern_never_leaks() {
        let stale = ActuationSignal {
            energized: false,
            pattern: 0b1111,
        };
        assert_eq!(&pack(&[stale, stale])[..], &[0x00]);
    }
}
