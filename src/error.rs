use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum Error {
  #[snafu(display("Timestamp {} collides with the no-timestamp sentinel", value))]
  SentinelCollision { value: i64 },

  #[snafu(display("Unknown stream {}", stream))]
  UnknownStream { stream: u16 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
