//! Tests for the demo driver service.

use rszipper::application::services::{DemoFailure, DemoService};
use rszipper::config::DemoSettings;
use rszipper::ZipperError;

const DEMO_TREE: &str = "-1
   0
       1
           2
               3
                   4
   6
       7
           8
               9
                  10
  12
      13
          14
              15
                  16
  18
      19
          20
              21
                  22
  24
      25
";

#[test]
fn given_default_settings_when_running_demo_then_builds_five_chains() {
    let outcome = DemoService::new(DemoSettings::default()).unwrap().run();

    assert_eq!(outcome.completed, 26);
    assert!(outcome.failure.is_none());
    assert_eq!(outcome.zipper.to_string(), DEMO_TREE);
    assert_eq!(outcome.zipper.depth(), 2);
    assert_eq!(*outcome.zipper.value(), 25);
    assert_eq!(outcome.zipper.root().map_children(|v| *v), vec![0, 6, 12, 18, 24]);
}

#[test]
fn given_partial_final_chain_when_stepping_back_five_then_fails_and_tree_is_intact() {
    let mut zipper = DemoService::new(DemoSettings::default()).unwrap().run().zipper;

    assert_eq!(zipper.step_back_n(5), Err(ZipperError::CannotStepBack));
    assert!(zipper.current().is_root());
    assert_eq!(zipper.to_string(), DEMO_TREE);
}

#[test]
fn given_reset_deeper_than_chain_when_running_demo_then_reports_first_failure() {
    let settings = DemoSettings {
        reset_depth: 6,
        ..Default::default()
    };
    assert!(settings.reset_exceeds_chain());

    let outcome = DemoService::new(settings).unwrap().run();

    assert_eq!(
        outcome.failure,
        Some(DemoFailure {
            iteration: 5,
            error: ZipperError::CannotStepBack,
        })
    );
    assert_eq!(outcome.completed, 5);
    // the loop stops; the cursor was left on the root by the failed climb
    assert!(outcome.zipper.current().is_root());
    assert_eq!(outcome.zipper.tree().height(), 6);
    assert_eq!(outcome.zipper.tree().leaf_values(), vec![&4]);
}

#[test]
fn given_reset_every_iteration_when_running_demo_then_fails_immediately() {
    let settings = DemoSettings {
        reset_every: 1,
        reset_depth: 1,
        ..Default::default()
    };
    let outcome = DemoService::new(settings).unwrap().run();

    assert_eq!(outcome.completed, 0);
    assert_eq!(outcome.failure.map(|f| f.iteration), Some(0));
    assert_eq!(outcome.zipper.to_string(), "-1\n");
}

#[test]
fn given_zero_reset_depth_when_running_demo_then_resets_are_no_ops() {
    let settings = DemoSettings {
        iterations: 8,
        reset_depth: 0,
        ..Default::default()
    };
    let outcome = DemoService::new(settings).unwrap().run();

    assert!(outcome.failure.is_none());
    // 0..=4, then 6, 7 continue the same chain
    assert_eq!(outcome.zipper.depth(), 7);
    assert_eq!(outcome.zipper.tree().leaf_values(), vec![&7]);
}
