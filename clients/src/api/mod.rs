pub mod wallet;

/// Slice of an account's history requested from the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionQuery {
    /// `page_size` entries starting at index `offset`, newest first.
    Range { offset: u32, page_size: u32 },
    /// Entries at or after a node timestamp.
    Since { timestamp: u64 },
}
