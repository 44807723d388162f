#![no_main]
use binary_of13::to_bytes;
use libfuzzer_sys::fuzz_target;
use parsers_of13::parse_experimenter_frame;

fuzz_target!(|data: Vec<u8>| {
    if let Ok(envelope) = parse_experimenter_frame(&data) {
        // Only the announced length belongs to the message.
        assert!(envelope.header().len() <= data.len());
        let serialized = to_bytes(&envelope).unwrap();
        assert_eq!(serialized.len(), envelope.header().len());
        let envelope2 = parse_experimenter_frame(&serialized).unwrap();
        let serialized2 = to_bytes(&envelope2).unwrap();

        assert_eq!(envelope, envelope2);
        assert_eq!(serialized, serialized2);
    }
});
