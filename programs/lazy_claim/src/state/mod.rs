pub mod nonce_state;
pub mod collection_state;
pub mod claim_state;
pub mod index_ranges;
pub mod wallet_state;

pub use nonce_state::*;
pub use collection_state::*;
pub use claim_state::*;
pub use index_ranges::*;
pub use wallet_state::*;
