//! Token wire codec.
//!
//! A share link's path segment is the encoded token: four fields in
//! fixed order — car id, issued-at millis, expires-at millis,
//! signature hex — joined by `.`. The car id is `%`-escaped so the
//! delimiter can never occur literally inside it; a genuine signature
//! is plain hex and needs no escaping.

use crate::error::ShareTokenError;
use crate::token::ShareToken;

pub const DELIMITER: char = '.';
const FIELD_COUNT: usize = 4;

/// Deterministic textual form of a token.
pub fn encode(token: &ShareToken) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        escape(&token.car_id),
        token.issued_at_millis,
        token.expires_at_millis,
        token.signature
    )
}

/// Parse token text back into a [`ShareToken`].
///
/// Structural validation only: exactly four fields, non-negative
/// integer timestamps, non-empty car id and signature. The signature's
/// *content* is judged by the verifier, so a structurally sound token
/// carrying a garbage tag still reaches the temporal checks.
pub fn decode(text: &str) -> Result<ShareToken, ShareTokenError> {
    let fields: Vec<&str> = text.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ShareTokenError::Malformed);
    }

    let car_id = unescape(fields[0]).ok_or(ShareTokenError::Malformed)?;
    if car_id.is_empty() {
        return Err(ShareTokenError::Malformed);
    }

    let issued_at_millis = parse_millis(fields[1])?;
    let expires_at_millis = parse_millis(fields[2])?;

    let signature = fields[3];
    if signature.is_empty() {
        return Err(ShareTokenError::Malformed);
    }

    Ok(ShareToken {
        car_id,
        issued_at_millis,
        expires_at_millis,
        signature: signature.to_string(),
    })
}

fn parse_millis(field: &str) -> Result<i64, ShareTokenError> {
    // Digits only: `i64::from_str` would also accept a leading `+`.
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShareTokenError::Malformed);
    }
    field.parse::<i64>().map_err(|_| ShareTokenError::Malformed)
}

fn escape(car_id: &str) -> String {
    let mut out = String::with_capacity(car_id.len());
    for c in car_id.chars() {
        match c {
            '%' => out.push_str("%25"),
            DELIMITER => out.push_str("%2E"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(field: &str) -> Option<String> {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match (chars.next()?, chars.next()?) {
            ('2', '5') => out.push('%'),
            ('2', 'E') | ('2', 'e') => out.push(DELIMITER),
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(car_id: &str) -> ShareToken {
        ShareToken {
            car_id: car_id.to_string(),
            issued_at_millis: 1_700_000_000_000,
            expires_at_millis: 1_700_086_400_000,
            signature: "ab".repeat(32),
        }
    }

    #[test]
    fn encode_matches_wire_format() {
        let text = encode(&token("car123"));
        assert!(text.starts_with("car123.1700000000000.1700086400000."));
    }

    #[test]
    fn round_trip() {
        for id in ["car123", "test-car-id", "with.dot", "100%", "%2E"] {
            let t = token(id);
            assert_eq!(decode(&encode(&t)).unwrap(), t, "car id {id:?}");
        }
    }

    #[test]
    fn escaped_delimiter_never_appears_literally() {
        let text = encode(&token("with.dot"));
        assert_eq!(text.split(DELIMITER).count(), 4);
    }

    #[test]
    fn decode_accepts_opaque_signature() {
        // Tag content is the verifier's concern, not the codec's.
        let t = decode("test-car-id.1000000000000.1000000001000.dummy-signature").unwrap();
        assert_eq!(t.car_id, "test-car-id");
        assert_eq!(t.issued_at_millis, 1_000_000_000_000);
        assert_eq!(t.expires_at_millis, 1_000_000_001_000);
        assert_eq!(t.signature, "dummy-signature");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for text in [
            "",
            "invalid-token-12345",
            "car123.1.2",
            "car123.1.2.sig.extra",
        ] {
            assert_eq!(decode(text), Err(ShareTokenError::Malformed), "{text:?}");
        }
    }

    #[test]
    fn non_numeric_timestamps_are_malformed() {
        for text in [
            "car123.abc.2000.sig",
            "car123.1000.def.sig",
            "car123.-1000.2000.sig",
            "car123.+1000.2000.sig",
            "car123..2000.sig",
            "car123.10 00.2000.sig",
        ] {
            assert_eq!(decode(text), Err(ShareTokenError::Malformed), "{text:?}");
        }
    }

    #[test]
    fn empty_car_id_is_malformed() {
        assert_eq!(
            decode(".1000.2000.sig"),
            Err(ShareTokenError::Malformed)
        );
    }

    #[test]
    fn empty_signature_is_malformed() {
        assert_eq!(
            decode("car123.1000.2000."),
            Err(ShareTokenError::Malformed)
        );
    }

    #[test]
    fn bad_escape_is_malformed() {
        for text in ["%zz.1000.2000.sig", "%2.1000.2000.sig", "abc%.1000.2000.sig"] {
            assert_eq!(decode(text), Err(ShareTokenError::Malformed), "{text:?}");
        }
    }
}
