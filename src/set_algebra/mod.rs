pub mod dedup;
pub mod ops;
pub mod set;
