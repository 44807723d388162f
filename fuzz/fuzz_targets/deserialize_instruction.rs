#![no_main]

mod common;
use binary_of13::{Decodable, Encodable, GetSize};
use experimenter_of13::EvictionImportanceInstruction;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    test_roundtrip!(EvictionImportanceInstruction, data);
    if let Ok(parsed) = EvictionImportanceInstruction::from_bytes(&data) {
        // Whatever length the input carried, the encoding announces the real one.
        let mut encoded = vec![0u8; parsed.get_size()];
        parsed.to_bytes(&mut encoded).unwrap();
        assert_eq!(&encoded[2..4], &[0, 18]);
    }
});
