pub mod bitpack;
pub mod burst;
pub mod fec_fields;
pub mod golay;
pub mod interleaver;
pub mod matrix;
pub mod scrambler;
