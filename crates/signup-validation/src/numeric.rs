//! Numeric validation functions

/// Inclusive lower bound
pub fn is_at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Inclusive upper bound
pub fn is_at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}
