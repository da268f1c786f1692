pub mod model;

pub use model::{clean_objdump, load_hex_text, load_raw_bin, Endian};
