//! Notifications for collaborators (counter display, chart, result table).

/// A zero-crossing was counted; carries the completed-cycle count after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCompleted(pub u32);

/// Events produced by one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A crossing was detected; the count is `floor(crossings / 2)`.
    CycleCompleted(u32),
    /// The target was reached and the controller paused itself.
    Stopped {
        completed_cycles: u32,
        elapsed_time: f64,
    },
}
