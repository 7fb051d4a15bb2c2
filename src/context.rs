use crate::stats::Stats;

#[derive(Default)]
pub struct Context {
  pub stats: Stats,
}

impl Context {
  pub fn new() -> Context {
    Context {
      stats: Default::default(),
    }
  }
}
