use anchor_lang::prelude::*;

/**
 * Index range list
 *
 * The collection's token identifier counter is shared by every creation path,
 * so the identifiers granted under one claim are not necessarily contiguous:
 * a base mint or another claim's mint can advance the counter in between.
 * Each claim keeps an ordered list of the contiguous identifier blocks it
 * owns, tagged with the claim-relative position of the block's first element,
 * so the claim can answer "which position is token X" without replaying mint
 * history.
 *
 * Ranges are ordered by start (the counter is monotonic), disjoint, and the
 * sum of their counts equals the claim's total minted count.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
    /// First token identifier in the range
    pub start: u64,
    /// Number of consecutive identifiers in the range
    pub count: u32,
    /// Claim-relative position of the first identifier in the range
    pub offset: u32,
}

impl IndexRange {
    /// Serialized size of one range entry
    pub const LEN: usize = 8 + 4 + 4;

    /// One past the last token identifier in the range
    pub fn end(&self) -> u64 {
        self.start + self.count as u64
    }
}

/// Records `count` newly assigned consecutive identifiers starting at
/// `first_token_id`.
///
/// The common case, consecutive claim mints with nothing minted in between,
/// extends the last range in place. A gap caused by an interleaved mint
/// starts a new range carrying the cumulative count of everything before it;
/// at most one range is added per non-contiguous event.
pub fn record(ranges: &mut Vec<IndexRange>, first_token_id: u64, count: u32) {
    if let Some(last) = ranges.last_mut() {
        if last.end() == first_token_id {
            last.count += count;
            return;
        }
    }
    let offset = ranges.last().map(|r| r.offset + r.count).unwrap_or(0);
    ranges.push(IndexRange {
        start: first_token_id,
        count,
        offset,
    });
}

/// Binary searches the range list for the range containing `token_id` and
/// returns its claim-relative position, or `None` when the identifier does
/// not belong to this claim.
pub fn resolve(ranges: &[IndexRange], token_id: u64) -> Option<u32> {
    let idx = ranges.partition_point(|r| r.start <= token_id);
    if idx == 0 {
        return None;
    }
    let range = &ranges[idx - 1];
    if token_id < range.end() {
        Some(range.offset + (token_id - range.start) as u32)
    } else {
        None
    }
}
