pub mod admin_operations;
pub mod initialize_faucet;
pub mod request_tokens;
pub mod views;

pub use admin_operations::*;
pub use initialize_faucet::*;
pub use request_tokens::*;
pub use views::*;
