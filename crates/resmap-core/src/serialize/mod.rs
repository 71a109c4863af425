//! Entity serialization: case translation, the attribute cache, and the
//! extraction engine.

mod cache;
mod case;
mod serializer;

pub use cache::{CacheStats, CacheStore, FieldSetFingerprint, MemoryCache};
pub use case::{from_wire_case, to_wire_case};
pub use serializer::EntitySerializer;
