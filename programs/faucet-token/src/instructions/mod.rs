pub mod admin_operations;
pub mod initialize_token;
pub mod mint_tokens;
pub mod views;

pub use admin_operations::*;
pub use initialize_token::*;
pub use mint_tokens::*;
pub use views::*;
