/// Minimum length of a client first name
pub const MIN_FIRST_NAME_LENGTH: usize = 2;

/// Valid beneficiary share range, inclusive
pub const MIN_BENEFICIARY_SHARE_PCT: f64 = 0.0;
pub const MAX_BENEFICIARY_SHARE_PCT: f64 = 100.0;
