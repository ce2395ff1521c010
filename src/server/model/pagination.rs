/// Default number of records returned by list operations.
pub const DEFAULT_LIMIT: u64 = 100;
/// Hard ceiling applied to requested limits.
pub const MAX_LIMIT: u64 = 1000;

/// Validated offset/limit window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
