use crate::context::Context;
use crate::pts::{PtsCorrector, Source};
use crate::{Error, Result};
use log::debug;
use std::collections::hash_map::HashMap;

/// A decoded frame's timestamps, as reported by the decoder.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
  pub stream: u16,
  pub reordered_pts: Option<i64>,
  pub dts: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restamped {
  pub stream: u16,
  pub pts: Option<i64>,
  pub source: Source,
}

/// Keeps an independent `PtsCorrector` per stream and hands each corrected
/// frame to `handler`.
pub struct Restamper<H> {
  correctors: HashMap<u16, PtsCorrector>,
  handler: H,
}

impl<H> Restamper<H>
where
  H: FnMut(&mut Context, &Restamped),
{
  pub fn new(handler: H) -> Restamper<H> {
    Restamper {
      correctors: HashMap::new(),
      handler,
    }
  }

  pub fn push(&mut self, ctx: &mut Context, frame: &Frame) {
    let stream = frame.stream;
    let corrector = self.correctors.entry(stream).or_insert_with(|| {
      debug!("Tracking new stream {}", stream);
      PtsCorrector::new()
    });

    let faulty_pts = corrector.faulty_pts_count();
    let faulty_dts = corrector.faulty_dts_count();
    let (pts, source) =
      corrector.correct_with_source(frame.reordered_pts, frame.dts);

    ctx.stats.frames += 1;
    ctx.stats.faulty_pts += corrector.faulty_pts_count() - faulty_pts;
    ctx.stats.faulty_dts += corrector.faulty_dts_count() - faulty_dts;
    match (pts, source) {
      (None, _) => ctx.stats.unstamped_frames += 1,
      (Some(_), Source::Pts) => ctx.stats.pts_selected += 1,
      (Some(_), Source::Dts) => ctx.stats.dts_selected += 1,
    }

    (self.handler)(ctx, &Restamped { stream, pts, source });
  }

  /// Forgets a stream's timestamp history, e.g. after a discontinuity.
  pub fn reset_stream(&mut self, ctx: &mut Context, stream: u16) -> Result<()> {
    match self.correctors.get_mut(&stream) {
      Some(corrector) => {
        debug!("Resetting stream {}", stream);
        corrector.reset();
        ctx.stats.streams_reset += 1;
        Ok(())
      }
      None => Err(Error::UnknownStream { stream }),
    }
  }

  pub fn remove_stream(&mut self, stream: u16) -> Option<PtsCorrector> {
    self.correctors.remove(&stream)
  }

  pub fn corrector(&self, stream: u16) -> Option<&PtsCorrector> {
    self.correctors.get(&stream)
  }

  pub fn streams<'a>(&'a self) -> impl Iterator<Item = u16> + 'a {
    self.correctors.keys().copied()
  }
}
