pub mod batch;
pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod isa;
pub mod table;
pub mod variant;

pub use batch::{decode_chunks, decode_words, BatchConfig, BatchItem};
pub use bits::Word;
pub use decoder::{DecodeError, Decoded, Decoder, Engine, InputFault};
pub use table::{Fpscr, TableError, TableReport};
pub use variant::{init, Registry, UnknownVariant, Variant};
