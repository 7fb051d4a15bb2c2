#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Stats {
  pub frames: u64,
  pub pts_selected: u64,
  pub dts_selected: u64,
  pub unstamped_frames: u64,
  pub faulty_pts: u64,
  pub faulty_dts: u64,
  pub streams_reset: u64,
}
