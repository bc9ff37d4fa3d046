pub mod input;
pub mod tokens;

pub use tokens::Tokens;
