pub mod attachment;
pub mod intake;
pub mod result;
pub mod usage;
