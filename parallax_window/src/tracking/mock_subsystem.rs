/// Mock tracking subsystem for testing without a camera
///
/// Records every call in a shared log so tests can assert call order after
/// the subsystem has been moved into a feed (or dropped with it).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use crate::error::{Error, Result};
use super::{TrackerVariant, TrackingSnapshot, TrackingSubsystem};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubsystemCall {
    ConfigureFrustum { aspect_ratio: f32, near_plane: f32 },
    SelectVariant(TrackerVariant),
    Start(u32),
    Latest,
    Calibrate,
    Stop,
    Teardown,
}

/// Shared call log
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<SubsystemCall>>>);

impl CallLog {
    pub fn push(&self, call: SubsystemCall) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<SubsystemCall> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: SubsystemCall) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    pub fn position(&self, call: SubsystemCall) -> Option<usize> {
        self.calls().iter().position(|c| *c == call)
    }
}

pub struct MockSubsystem {
    pub log: CallLog,
    pub fail_start: bool,
    /// Snapshots handed out one per `latest()`; the last one repeats
    pub script: VecDeque<TrackingSnapshot>,
    current: Option<TrackingSnapshot>,
}

impl MockSubsystem {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            fail_start: false,
            script: VecDeque::new(),
            current: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_start: true,
            ..Self::new()
        }
    }

    pub fn with_script(snapshots: impl IntoIterator<Item = TrackingSnapshot>) -> Self {
        Self {
            script: snapshots.into_iter().collect(),
            ..Self::new()
        }
    }
}

impl TrackingSubsystem for MockSubsystem {
    fn configure_frustum(&mut self, aspect_ratio: f32, near_plane: f32) {
        self.log.push(SubsystemCall::ConfigureFrustum { aspect_ratio, near_plane });
    }

    fn select_variant(&mut self, variant: TrackerVariant) {
        self.log.push(SubsystemCall::SelectVariant(variant));
    }

    fn start(&mut self, device_index: u32) -> Result<()> {
        self.log.push(SubsystemCall::Start(device_index));
        if self.fail_start {
            Err(Error::DeviceUnavailable(format!("mock device {}", device_index)))
        } else {
            Ok(())
        }
    }

    fn latest(&mut self) -> Option<TrackingSnapshot> {
        self.log.push(SubsystemCall::Latest);
        if let Some(next) = self.script.pop_front() {
            self.current = Some(next);
        }
        self.current
    }

    fn calibrate(&mut self) {
        self.log.push(SubsystemCall::Calibrate);
    }

    fn stop(&mut self) {
        self.log.push(SubsystemCall::Stop);
    }

    fn teardown(&mut self) {
        self.log.push(SubsystemCall::Teardown);
    }
}
