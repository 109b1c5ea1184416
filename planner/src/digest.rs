//! Content digest of a planning problem.
//!
//! The digest binds a plan to the exact inputs it was computed from:
//! `sha256(DOMAIN_PROBLEM || canonical_json(problem))`, rendered as
//! `"sha256:<hex>"`.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace.
//! 3. Numbers must be integers; floats are rejected.

use sha2::{Digest, Sha256};

use crate::error::PlanError;
use crate::problem::PlanningProblemV1;

/// Domain prefix for problem digests. Null-terminated.
pub const DOMAIN_PROBLEM: &[u8] = b"GRIPPER::PROBLEM::V1\0";

/// Compute the problem digest.
///
/// # Errors
///
/// Returns [`PlanError::Json`] if the problem cannot be serialized or
/// contains a non-integer number.
pub fn problem_digest(problem: &PlanningProblemV1) -> Result<String, PlanError> {
    let value = serde_json::to_value(problem)?;
    let bytes = canonical_json_bytes(&value)?;
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_PROBLEM);
    hasher.update(&bytes);
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns a `serde_json` error for non-integer numbers.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), serde_json::Error> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(serde::ser::Error::custom(format!(
                "non-integer number in canonical JSON: {n}"
            )))
        }
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
            Ok(())
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                serde_json::to_writer(&mut *buf, key)?;
                buf.push(b':');
                write_value(buf, &map[*key])?;
            }
            buf.push(b'}');
            Ok(())
        }
        // Scalars: serde_json's compact writer is already canonical.
        scalar => serde_json::to_writer(&mut *buf, scalar),
    }
}
