pub mod claim_record;
pub mod faucet_state;

pub use claim_record::*;
pub use faucet_state::*;
