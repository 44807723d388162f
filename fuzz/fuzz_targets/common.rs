/// Parses `$data` as `$msg_type`; if that succeeds, encodes the value, parses the encoding
/// and checks that the second encoding matches the first byte for byte and that both parses
/// agree.
///
/// Inputs that fail to parse are ignored.
#[macro_export]
macro_rules! test_roundtrip {
    ($msg_type:ty, $data:expr) => {{
        if let Ok(parsed) = <$msg_type>::from_bytes(&$data[..]) {
            let mut encoded_1 = vec![0u8; parsed.get_size()];
            parsed
                .to_bytes(&mut encoded_1)
                .expect("Encoding failed after a successful parse");

            let reparsed = <$msg_type>::from_bytes(&encoded_1)
                .expect("Roundtrip failed: encoder produced invalid bytes");

            let mut encoded_2 = vec![0u8; reparsed.get_size()];
            reparsed
                .to_bytes(&mut encoded_2)
                .expect("Second encoding failed");

            assert_eq!(encoded_1, encoded_2, "Encoding is not stable");
            assert_eq!(parsed, reparsed, "{}: roundtrip changed the message", parsed);
        };
    }};
}
