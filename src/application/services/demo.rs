//! Demo driver service
//!
//! Grows chains of integers under a root and periodically climbs back up
//! to the root, stopping at the first navigation error.

use tracing::{debug, info, instrument};

use crate::application::ApplicationResult;
use crate::config::DemoSettings;
use crate::domain::{Zipper, ZipperError};

/// The navigation error that ended a demo run early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFailure {
    /// Loop iteration that failed
    pub iteration: u32,
    pub error: ZipperError,
}

/// Result of one demo run: the tree is always returned, even after a failure.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub zipper: Zipper<i64>,
    /// Iterations that ran to completion
    pub completed: u32,
    pub failure: Option<DemoFailure>,
}

/// Service running the demo loop.
pub struct DemoService {
    settings: DemoSettings,
}

impl DemoService {
    /// Create a new demo service; rejects settings the loop cannot run with.
    pub fn new(settings: DemoSettings) -> ApplicationResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// Run the loop.
    ///
    /// The first navigation error stops the loop; it is reported in the
    /// outcome together with the tree built so far. The tree stays consistent:
    /// a failed multi-step climb leaves the cursor on the root.
    #[instrument(level = "debug", skip(self), fields(iterations = self.settings.iterations))]
    pub fn run(&self) -> DemoOutcome {
        let mut zipper = Zipper::new(self.settings.root_value);
        let mut completed = 0;

        for i in 0..self.settings.iterations {
            if self.settings.is_reset_iteration(i) {
                debug!(iteration = i, depth = zipper.depth(), "stepping back");
                if let Err(error) = zipper.step_back_n(self.settings.reset_depth as usize) {
                    debug!(iteration = i, %error, "demo stopped");
                    return DemoOutcome {
                        zipper,
                        completed,
                        failure: Some(DemoFailure {
                            iteration: i,
                            error,
                        }),
                    };
                }
            } else {
                zipper.enter_new_branch(i64::from(i));
            }
            completed += 1;
        }

        info!(nodes = zipper.len(), depth = zipper.depth(), "demo finished");
        DemoOutcome {
            zipper,
            completed,
            failure: None,
        }
    }
}
