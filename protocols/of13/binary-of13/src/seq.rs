//! Count-free sequences of fixed-size elements.
//!
//! A sequence is written as the plain concatenation of its elements: no count and no
//! terminator. The reader infers where the list ends from the length of the slice it is given,
//! so [`decode_seq`] must be handed a cursor that ends exactly where the enclosing message
//! ends. Stripping the outer envelope to that exact length is the caller's job; this module
//! only guarantees that a fragment shorter than one element is reported instead of dropped.

use crate::{Cursor, Decodable, Encodable, Error, Fixed, GetSize, Writer};

/// Sum of the encoded sizes of `items`.
pub fn seq_size<T: GetSize>(items: &[T]) -> usize {
    items.iter().map(GetSize::get_size).sum()
}

/// Writes every element of `items`, in order.
pub fn encode_seq<T: Encodable>(items: &[T], writer: &mut Writer<'_>) -> Result<(), Error> {
    for item in items {
        item.to_writer(writer)?;
    }
    Ok(())
}

/// Decodes elements from the front of `cursor` until it is empty.
///
/// Fails with [`Error::TruncatedInput`] as soon as fewer than `T::SIZE` (but more than zero)
/// bytes remain.
pub fn decode_seq<T: Decodable + Fixed>(cursor: &mut Cursor<'_>) -> Result<Vec<T>, Error> {
    let mut items = Vec::with_capacity(cursor.remaining() / T::SIZE.max(1));
    while !cursor.is_empty() {
        items.push(T::from_cursor(cursor)?);
    }
    Ok(items)
}
