//! Birth weight and its consistency with the gestational-age bucket.

use tracheo_core::catalog::options;

pub const MIN_GRAMS: u32 = 300;
pub const MAX_GRAMS: u32 = 6_000;

/// A gestational-age answer and the birth weights compatible with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestationalBucket {
    pub tag: &'static str,
    pub label: &'static str,
    pub min_grams: u32,
    pub max_grams: u32,
}

pub const BUCKETS: [GestationalBucket; 4] = [
    GestationalBucket {
        tag: options::GESTATION_UNDER_28,
        label: "under 28 weeks",
        min_grams: 300,
        max_grams: 1_800,
    },
    GestationalBucket {
        tag: options::GESTATION_28_33,
        label: "28 to 33 weeks",
        min_grams: 600,
        max_grams: 3_000,
    },
    GestationalBucket {
        tag: options::GESTATION_34_36,
        label: "34 to 36 weeks",
        min_grams: 1_200,
        max_grams: 4_000,
    },
    GestationalBucket {
        tag: options::GESTATION_37_41,
        label: "37 to 41 weeks",
        min_grams: 2_000,
        max_grams: 6_000,
    },
];

pub fn bucket(tag: &str) -> Option<&'static GestationalBucket> {
    BUCKETS.iter().find(|b| b.tag == tag)
}

/// Whole grams within the plausible newborn range.
pub fn parse_grams(input: &str) -> Result<u32, String> {
    let grams: u32 = input
        .trim()
        .parse()
        .map_err(|_| "must be a whole number of grams".to_string())?;
    if !(MIN_GRAMS..=MAX_GRAMS).contains(&grams) {
        return Err(format!(
            "must be between {MIN_GRAMS} and {MAX_GRAMS} grams"
        ));
    }
    Ok(grams)
}

/// Weight message: the weight is judged against the bucket.
pub fn check_weight(grams: u32, bucket: &GestationalBucket) -> Result<(), String> {
    if (bucket.min_grams..=bucket.max_grams).contains(&grams) {
        return Ok(());
    }
    Err(format!(
        "{grams} g is outside the expected range for {} ({} to {} g)",
        bucket.label, bucket.min_grams, bucket.max_grams
    ))
}

/// Bucket message: the bucket is judged against an already-entered weight.
pub fn check_bucket(bucket: &GestationalBucket, grams: u32) -> Result<(), String> {
    if (bucket.min_grams..=bucket.max_grams).contains(&grams) {
        return Ok(());
    }
    Err(format!(
        "{} is not compatible with a birth weight of {grams} g ({} to {} g expected)",
        bucket.label, bucket.min_grams, bucket.max_grams
    ))
}
