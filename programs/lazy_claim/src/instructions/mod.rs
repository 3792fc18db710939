pub mod create_collection;
pub mod mint_base;
pub mod initialize_claim;
pub mod update_claim;
pub mod get_claim;
pub mod mint;
pub mod mint_batch;
pub mod token_uri;

pub use create_collection::*;
pub use mint_base::*;
pub use initialize_claim::*;
pub use update_claim::*;
pub use get_claim::*;
pub use mint::*;
pub use mint_batch::*;
pub use token_uri::*;
