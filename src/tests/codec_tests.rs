#[cfg(test)]
mod tests {
    use crate::codec::{BASE62, BASE82, MAX_LEN};
    use crate::*;
    use rand::Rng;

    #[test]
    fn test_random_roundtrips() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let value = rng.random_range(0..=i64::MAX);
            let s62 = encode_base62(value).unwrap();
            assert_eq!(decode_base62(&s62).unwrap(), value, "base62 {value}");
            let s82 = encode_base82(value).unwrap();
            assert_eq!(decode_base82(&s82).unwrap(), value, "base82 {value}");
            assert!(s82.len() <= s62.len());
        }
    }

    #[test]
    fn test_boundary_values() {
        let values = [0i64, 1, 61, 62, 81, 82, 3843, 3844, i64::MAX - 1, i64::MAX];
        for &value in &values {
            assert_eq!(decode_base62(&encode_base62(value).unwrap()).unwrap(), value);
            assert_eq!(decode_base82(&encode_base82(value).unwrap()).unwrap(), value);
        }
    }

    #[test]
    fn test_max_i64_scenario() {
        let encoded = encode_base62(9_223_372_036_854_775_807).unwrap();
        assert_eq!(encoded.len(), MAX_LEN);
        assert_eq!(decode_base62(&encoded).unwrap(), 9_223_372_036_854_775_807);
    }

    #[test]
    fn test_generated_ids_roundtrip() {
        let worker = IdWorker::with_custom_node(42).unwrap();
        for _ in 0..1000 {
            let id = worker.next_id().unwrap();
            let mut buf = [0u8; MAX_LEN];
            let s = BASE62.encode_into(id, &mut buf).unwrap();
            assert_eq!(BASE62.decode(s).unwrap(), id);
            assert_eq!(BASE82.decode(&BASE82.encode(id).unwrap()).unwrap(), id);
        }
    }

    #[test]
    fn test_alphabets_disagree_on_extended_symbols() {
        let encoded = encode_base82(71).unwrap();
        assert_eq!(encoded, "{");
        assert_eq!(
            decode_base62(&encoded),
            Err(CodecError::InvalidSymbol('{'))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::NegativeInput(-5).to_string(),
            "Cannot encode negative number -5"
        );
        assert_eq!(
            CodecError::InvalidLength { len: 0, max: 11 }.to_string(),
            "Encoded length 0 is invalid, it must be between 1 and 11"
        );
        assert_eq!(CodecError::InvalidSymbol('#').to_string(), "Invalid symbol: '#'");
    }
}
