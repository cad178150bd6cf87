use tracing::debug;

use crate::{DecodeError, Segment};

/// Decode every name in an Option 119 byte sequence.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    let mut names = Vec::new();
    let mut cursor = 0;
    while cursor < bytes.len() {
        let (name, next) = read_name(bytes, cursor)?;
        names.push(name);
        cursor = next;
    }
    Ok(names)
}

/// Read one name starting at `start`, returning it with the offset just past
/// its terminator (an END marker or the first pointer).
///
/// A pointer must target an offset strictly before the start of the name it
/// appears in, or before the previous pointer's target once a chain is being
/// followed. The bound strictly decreases, so the chase always terminates and
/// cycles are rejected.
pub fn read_name(bytes: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
    let mut labels: Vec<String> = Vec::new();
    let mut offset = start;
    let mut bound = start;
    let mut resume = None;

    while offset < bytes.len() {
        match decode_segment(bytes, offset)? {
            Segment::End { next } => return Ok((labels.join("."), resume.unwrap_or(next))),
            Segment::Text { label, next } => {
                labels.push(label);
                offset = next;
            }
            Segment::Pointer { target, next } => {
                if target >= bound {
                    return Err(DecodeError::InvalidReference {
                        offset,
                        target,
                        start: bound,
                    });
                }
                debug!("offset {offset}: following pointer to {target}");
                resume.get_or_insert(next);
                bound = target;
                offset = target;
            }
        }
    }

    Err(DecodeError::MissingTerminator { start: bound })
}

/// Classify the wire unit at `offset`.
pub fn decode_segment(bytes: &[u8], offset: usize) -> Result<Segment, DecodeError> {
    let Some(&d) = bytes.get(offset) else {
        return Err(DecodeError::TruncatedSegment { offset });
    };

    match d & 0xC0 {
        0x00 if d == 0 => Ok(Segment::End { next: offset + 1 }),
        0x00 => {
            let end = offset + d as usize;
            if end >= bytes.len() {
                return Err(DecodeError::TruncatedSegment { offset });
            }
            let label = bytes[offset + 1..=end].iter().map(|&b| char::from(b)).collect();
            Ok(Segment::Text {
                label,
                next: end + 1,
            })
        }
        0xC0 => {
            let Some(&lo) = bytes.get(offset + 1) else {
                return Err(DecodeError::TruncatedSegment { offset });
            };
            Ok(Segment::Pointer {
                target: ((d & 0x3F) as usize) << 8 | lo as usize,
                next: offset + 2,
            })
        }
        _ => Err(DecodeError::BadLengthByte { offset, byte: d }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_name() {
        let bytes = [6, b'g', b'o', b'o', b'g', b'l', b'e', 3, b'c', b'o', b'm', 0];
        assert_eq!(decode_all(&bytes).unwrap(), vec!["google.com"]);
    }

    #[test]
    fn test_decode_follows_pointers() {
        let bytes = [
            6, b'g', b'o', b'o', b'g', b'l', b'e', 3, b'c', b'o', b'm', 0, 5, b'y', b'a', b'h',
            b'o', b'o', 0xC0, 7,
        ];
        assert_eq!(decode_all(&bytes).unwrap(), vec!["google.com", "yahoo.com"]);
    }

    #[test]
    fn test_decode_pointer_chain() {
        // a.com, b.a.com, c.b.a.com
        let bytes = [
            1, b'a', 3, b'c', b'o', b'm', 0, 1, b'b', 0xC0, 0, 1, b'c', 0xC0, 7,
        ];
        assert_eq!(
            decode_all(&bytes).unwrap(),
            vec!["a.com", "b.a.com", "c.b.a.com"]
        );
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_all(&[]).unwrap().is_empty());
        assert_eq!(decode_all(&[0]).unwrap(), vec![""]);
    }

    #[test]
    fn test_decode_rejects_loop() {
        let err = decode_all(&[3, b'c', b'o', b'm', 0xC0, 0, 0]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidReference { target: 0, .. }));
    }

    #[test]
    fn test_decode_rejects_self_reference() {
        let err = decode_all(&[0xC0, 0]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidReference {
                offset: 0,
                target: 0,
                start: 0
            }
        );
    }

    #[test]
    fn test_decode_rejects_forward_reference() {
        let err = decode_all(&[4, b't', b'e', b's', b't', 0xC0, 7, 3, b'c', b'o', b'm', 0])
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidReference { target: 7, .. }));
    }

    #[test]
    fn test_decode_rejects_pointer_into_own_name() {
        // The pointer target lies before the pointer but after the name start.
        let err = decode_all(&[1, b'a', 1, b'b', 0xC0, 2]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidReference {
                offset: 4,
                target: 2,
                start: 0
            }
        );
    }

    #[test]
    fn test_decode_rejects_missing_terminator() {
        let err = decode_all(&[4, b't', b'e', b's', b't', 3, b'c', b'o', b'm']).unwrap_err();
        assert_eq!(err, DecodeError::MissingTerminator { start: 0 });
    }

    #[test]
    fn test_decode_rejects_truncated_segment() {
        let err = decode_all(&[3, b'A', b'B', b'C', 4, b'A', b'B', b'C']).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedSegment { offset: 4 });
    }

    #[test]
    fn test_decode_rejects_truncated_pointer() {
        let err = decode_all(&[1, b'a', 0, 1, b'b', 0xC0]).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedSegment { offset: 5 });
    }

    #[test]
    fn test_decode_rejects_reserved_length_bits() {
        assert_eq!(
            decode_all(&[0x40, 0]).unwrap_err(),
            DecodeError::BadLengthByte {
                offset: 0,
                byte: 0x40
            }
        );
        assert!(matches!(
            decode_all(&[1, b'a', 0x80]),
            Err(DecodeError::BadLengthByte { byte: 0x80, .. })
        ));
    }

    #[test]
    fn test_decode_deep_labelled_chain() {
        // Every name is "a" followed by a pointer to the previous name.
        let mut bytes = vec![0];
        let mut prev = 0usize;
        while bytes.len() + 4 <= 0x3FFF {
            let here = bytes.len();
            bytes.extend_from_slice(&[1, b'a', 0xC0 | (prev >> 8) as u8, prev as u8]);
            prev = here;
        }
        let depth = (bytes.len() - 1) / 4;
        assert!(depth > 4000);

        let (name, next) = read_name(&bytes, prev).unwrap();
        assert_eq!(next, bytes.len());
        assert_eq!(name.split('.').count(), depth);
        assert!(name.split('.').all(|label| label == "a"));
    }

    #[test]
    fn test_decode_deep_root_chain() {
        let mut bytes = vec![0];
        let mut prev = 0usize;
        while bytes.len() + 2 <= 0x3FFF {
            let here = bytes.len();
            bytes.extend_from_slice(&[0xC0 | (prev >> 8) as u8, prev as u8]);
            prev = here;
        }

        let names = decode_all(&bytes).unwrap();
        assert_eq!(names.len(), 1 + (bytes.len() - 1) / 2);
        assert!(names.len() > 4000);
        assert!(names.iter().all(String::is_empty));
    }

    #[test]
    fn test_decode_chain_must_keep_decreasing() {
        // x at 0, y.x at 3; the name at 7 points to 3, whose pointer back to 0
        // is fine. A second hop may not climb back above the first target.
        let bytes = [1, b'x', 0, 1, b'y', 0xC0, 0, 1, b'z', 0xC0, 3];
        assert_eq!(decode_all(&bytes).unwrap(), vec!["x", "y.x", "z.y.x"]);

        let err = read_name(&[1, b'x', 0, 0xC0, 6, 0, 0xC0, 3], 6).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidReference {
                offset: 3,
                target: 6,
                start: 3
            }
        );
    }

    #[test]
    fn test_read_name_returns_next_offset() {
        let bytes = [1, b'a', 0, 1, b'b', 0xC0, 0];
        assert_eq!(read_name(&bytes, 0).unwrap(), ("a".to_string(), 3));
        assert_eq!(read_name(&bytes, 3).unwrap(), ("b.a".to_string(), 7));
    }

    #[test]
    fn test_decode_segment_kinds() {
        let bytes = [0, 2, b'h', b'i', 0xC1, 0x02];
        assert_eq!(decode_segment(&bytes, 0).unwrap(), Segment::End { next: 1 });
        assert_eq!(
            decode_segment(&bytes, 1).unwrap(),
            Segment::Text {
                label: "hi".to_string(),
                next: 4
            }
        );
        assert_eq!(
            decode_segment(&bytes, 4).unwrap(),
            Segment::Pointer {
                target: 0x102,
                next: 6
            }
        );
    }
}
