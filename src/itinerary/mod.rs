pub mod assembler;

pub use assembler::ItineraryAssembler;
