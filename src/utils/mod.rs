pub mod fs;
pub mod serde;
