use crate::{Error, Result};

/// The reserved "no timestamp" value used by libraries that pass timestamps as
/// plain integers (`AV_NOPTS_VALUE`).
pub const NO_TIMESTAMP: i64 = i64::MIN;

pub fn from_raw(ts: i64) -> Option<i64> {
  if ts == NO_TIMESTAMP {
    None
  } else {
    Some(ts)
  }
}

/// Fails if a real timestamp would be indistinguishable from the sentinel.
pub fn to_raw(ts: Option<i64>) -> Result<i64> {
  match ts {
    None => Ok(NO_TIMESTAMP),
    Some(value) if value == NO_TIMESTAMP => {
      Err(Error::SentinelCollision { value })
    }
    Some(value) => Ok(value),
  }
}
