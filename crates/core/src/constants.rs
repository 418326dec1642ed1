/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: usize = 2;

/// Scale factor between fractions and percentages
pub const PERCENT_SCALE: f64 = 100.0;

/// Minimum client age accepted at onboarding
pub const MIN_CLIENT_AGE_YEARS: f64 = 18.0;

/// Average days per year, accounting for leap years
pub const DAYS_PER_YEAR: f64 = 365.25;
