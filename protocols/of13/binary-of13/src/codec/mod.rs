// Traits and cursors for encoding and decoding records directly on byte slices.
//
// Records never go through `Read`/`Write` streams: the codec writes into a slice sized with
// `GetSize` and reads from a slice that the caller has already bounded to the payload.
//
// - `GetSize`: exact encoded size of a value.
// - `Fixed`: records with a compile-time constant size; `GetSize` is derived from it.
// - `Encodable`/`Writer`: big-endian writes at increasing offsets, padding zero-filled.
// - `Decodable`/`Cursor`: bounds-checked big-endian reads, padding skipped.
pub mod decodable;
pub mod encodable;

/// [`GetSize`] returns the total encoded size of a value in bytes.
pub trait GetSize {
    fn get_size(&self) -> usize;
}

/// [`Fixed`] marks records whose encoded size never depends on their contents.
pub trait Fixed {
    /// Number of bytes needed to encode or decode the record.
    const SIZE: usize;
}

impl<T: Fixed> GetSize for T {
    fn get_size(&self) -> usize {
        Self::SIZE
    }
}
