pub mod campaign;
pub mod prospect;
