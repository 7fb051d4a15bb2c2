//! Best-effort presentation timestamps for decoded frames whose reported
//! timestamps may be missing or arrive out of order.

mod corrector;
mod raw;
mod restamper;

pub use corrector::{PtsCorrector, Source};
pub use raw::{from_raw, to_raw, NO_TIMESTAMP};
pub use restamper::{Frame, Restamped, Restamper};
