//! Property-based tests for `PtsCorrector`.

use proptest::prelude::*;
use pts_correction::pts::PtsCorrector;

// Builds a strictly increasing sequence from a start value and positive steps.
fn increasing(start: i64, steps: &[i64]) -> Vec<i64> {
  steps
    .iter()
    .scan(start, |acc, step| {
      *acc += step;
      Some(*acc)
    })
    .collect()
}

fn pair() -> impl Strategy<Value = (Option<i64>, Option<i64>)> {
  (
    prop::option::of(-1_000i64..1_000),
    prop::option::of(-1_000i64..1_000),
  )
}

proptest! {
  /// Increasing DTS without a PTS is never faulty and always passed through.
  #[test]
  fn increasing_dts_only(
    start in -1_000_000i64..1_000_000,
    steps in prop::collection::vec(1i64..10_000, 1..64),
  ) {
    let mut c = PtsCorrector::new();
    for dts in increasing(start, &steps) {
      prop_assert_eq!(c.correct(None, Some(dts)), Some(dts));
    }
    prop_assert_eq!(c.faulty_dts_count(), 0);
    prop_assert_eq!(c.faulty_pts_count(), 0);
  }

  /// Every step of a non-increasing DTS sequence counts as one fault.
  #[test]
  fn non_increasing_dts(
    start in -1_000_000i64..1_000_000,
    steps in prop::collection::vec(0i64..10_000, 1..64),
  ) {
    let mut c = PtsCorrector::new();
    c.correct(None, Some(start));
    let mut dts = start;
    for step in &steps {
      dts -= step;
      c.correct(None, Some(dts));
    }
    prop_assert_eq!(c.faulty_dts_count(), steps.len() as u64);
  }

  /// The first observation is never compared against anything.
  #[test]
  fn first_call_never_faulty(
    pts in prop::option::of(any::<i64>()),
    dts in prop::option::of(any::<i64>()),
  ) {
    let mut c = PtsCorrector::new();
    c.correct(pts, dts);
    prop_assert_eq!(c.faulty_pts_count(), 0);
    prop_assert_eq!(c.faulty_dts_count(), 0);
  }

  /// Increasing PTS without a DTS is always used as is.
  #[test]
  fn increasing_pts_only(
    start in -1_000_000i64..1_000_000,
    steps in prop::collection::vec(1i64..10_000, 1..64),
  ) {
    let mut c = PtsCorrector::new();
    for pts in increasing(start, &steps) {
      prop_assert_eq!(c.correct(Some(pts), None), Some(pts));
    }
    prop_assert_eq!(c.faulty_pts_count(), 0);
  }

  /// Counters never decrease and the output is always one of the inputs.
  #[test]
  fn output_is_an_input(frames in prop::collection::vec(pair(), 1..128)) {
    let mut c = PtsCorrector::new();
    for (pts, dts) in frames {
      let (faulty_pts, faulty_dts) = (c.faulty_pts_count(), c.faulty_dts_count());
      let out = c.correct(pts, dts);
      prop_assert!(out == pts || out == dts);
      if pts.is_some() {
        prop_assert!(out.is_some());
      }
      prop_assert!(c.faulty_pts_count() >= faulty_pts);
      prop_assert!(c.faulty_dts_count() >= faulty_dts);
      prop_assert!(c.faulty_pts_count() - faulty_pts <= 1);
      prop_assert!(c.faulty_dts_count() - faulty_dts <= 1);
    }
  }

  /// `reset` restores a fresh corrector regardless of history.
  #[test]
  fn reset_forgets_history(frames in prop::collection::vec(pair(), 0..64)) {
    let mut c = PtsCorrector::new();
    for (pts, dts) in frames {
      c.correct(pts, dts);
    }
    c.reset();
    prop_assert_eq!(&c, &PtsCorrector::new());
    c.reset();
    prop_assert_eq!(c, PtsCorrector::new());
  }
}
