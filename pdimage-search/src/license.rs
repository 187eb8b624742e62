//! Public-domain license filtering.
//!
//! Matching is exact and case-sensitive. A record whose archive reports a
//! non-conforming label (for example `"Unknown"` or `"PD-old"`) is dropped
//! even when the image itself is unrestricted.

use crate::types::CanonicalRecord;

/// License labels treated as unrestricted-use.
pub const PUBLIC_DOMAIN_LICENSES: &[&str] = &[
    "Public Domain",
    "No known copyright restrictions",
    "Public Domain Dedication",
    "US Government Work",
];

/// Whether `license` is on the public-domain allow-list.
pub fn is_public_domain(license: &str) -> bool {
    PUBLIC_DOMAIN_LICENSES.contains(&license)
}

/// Keep only public-domain records when `public_only` is set; otherwise
/// return `records` untouched. Order is preserved.
pub fn filter_records(records: Vec<CanonicalRecord>, public_only: bool) -> Vec<CanonicalRecord> {
    if !public_only {
        return records;
    }
    records
        .into_iter()
        .filter(|record| is_public_domain(&record.license))
        .collect()
}
