use crate::pts::raw::{self, NO_TIMESTAMP};
use log::{debug, trace};

/// The channel a corrected timestamp was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
  Pts,
  Dts,
}

/// Picks a presentation timestamp per frame, trusting whichever of the
/// reordered PTS or the DTS has been out of order less often so far.
///
/// One instance per stream; `correct` must be called once per frame, in
/// arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PtsCorrector {
  faulty_pts: u64,
  faulty_dts: u64,
  last_pts: Option<i64>,
  last_dts: Option<i64>,
  source: Option<Source>,
}

// An absent previous value never makes the current one faulty.
fn is_faulty(ts: i64, last: Option<i64>) -> bool {
  matches!(last, Some(last) if ts <= last)
}

impl PtsCorrector {
  pub fn new() -> PtsCorrector {
    Default::default()
  }

  pub fn reset(&mut self) {
    *self = PtsCorrector::new();
  }

  pub fn correct(
    &mut self,
    reordered_pts: Option<i64>,
    dts: Option<i64>,
  ) -> Option<i64> {
    self.correct_with_source(reordered_pts, dts).0
  }

  /// Like `correct`, but also reports which input the result was taken from.
  /// The source is `Dts` whenever the PTS is not used, even if the DTS is
  /// absent too.
  pub fn correct_with_source(
    &mut self,
    reordered_pts: Option<i64>,
    dts: Option<i64>,
  ) -> (Option<i64>, Source) {
    if let Some(dts) = dts {
      if is_faulty(dts, self.last_dts) {
        self.faulty_dts += 1;
        trace!(
          "Faulty DTS {} after {:?} ({} so far)",
          dts,
          self.last_dts,
          self.faulty_dts
        );
      }
      self.last_dts = Some(dts);
    }

    if let Some(pts) = reordered_pts {
      if is_faulty(pts, self.last_pts) {
        self.faulty_pts += 1;
        trace!(
          "Faulty PTS {} after {:?} ({} so far)",
          pts,
          self.last_pts,
          self.faulty_pts
        );
      }
      self.last_pts = Some(pts);
    }

    let source = match reordered_pts {
      Some(_) if dts.is_none() || self.faulty_pts <= self.faulty_dts => {
        Source::Pts
      }
      _ => Source::Dts,
    };

    if let Some(prev) = self.source {
      if prev != source {
        debug!(
          "Switching from {:?} to {:?} (faulty pts: {}, faulty dts: {})",
          prev, source, self.faulty_pts, self.faulty_dts
        );
      }
    }
    self.source = Some(source);

    match source {
      Source::Pts => (reordered_pts, source),
      Source::Dts => (dts, source),
    }
  }

  /// Raw variant for callers exchanging `NO_TIMESTAMP`-encoded integers.
  pub fn correct_raw(&mut self, reordered_pts: i64, dts: i64) -> i64 {
    self
      .correct(raw::from_raw(reordered_pts), raw::from_raw(dts))
      .unwrap_or(NO_TIMESTAMP)
  }

  pub fn faulty_pts_count(&self) -> u64 {
    self.faulty_pts
  }

  pub fn faulty_dts_count(&self) -> u64 {
    self.faulty_dts
  }

  pub fn last_pts(&self) -> Option<i64> {
    self.last_pts
  }

  pub fn last_dts(&self) -> Option<i64> {
    self.last_dts
  }

  /// Source of the most recent output; `None` until the first frame.
  pub fn source(&self) -> Option<Source> {
    self.source
  }
}
