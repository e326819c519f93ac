use super::BatcherTransaction;
use crate::frame::FrameWithMetadata;

/// Sort transactions into inclusion order: by block number, then by position
/// within the block.
///
/// This is the order in which derivation consumes frames, so it must be
/// applied before frames are grouped into channels.
pub fn order_transactions(transactions: &mut [BatcherTransaction]) {
    transactions.sort_by_key(|tx| (tx.block_number(), tx.tx_index()));
}

/// Flatten transactions into frames, tagging each with its provenance.
///
/// Frames keep the order of the transactions and, within a transaction, the
/// order in which they appear in its calldata.
#[must_use]
pub fn transactions_to_frames(transactions: Vec<BatcherTransaction>) -> Vec<FrameWithMetadata> {
    transactions
        .into_iter()
        .flat_map(|tx| {
            let (hash, block, index) = (tx.tx_hash(), tx.block_number(), tx.tx_index());
            tx.into_frames()
                .into_iter()
                .map(move |frame| FrameWithMetadata::new(hash, block, index, frame))
        })
        .collect()
}
