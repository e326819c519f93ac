//! Loading batcher transactions persisted by an earlier fetch step.
//!
//! Each file in the input directory holds one JSON [`TransactionRecord`].
//! Records not sent to the configured batch inbox, or whose sender failed
//! validation, are filtered out. The survivors are ordered the way the chain
//! included them and flattened into frames for the reassembly core.

pub mod error;
pub mod load;
pub mod order;
pub mod record;

pub use error::IngestError;
pub use load::{LoadFailure, LoadOutcome, load_transaction_file, load_transactions};
pub use order::{order_transactions, transactions_to_frames};
pub use record::{Address, BatcherTransaction, TransactionRecord};
