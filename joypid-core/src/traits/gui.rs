//! OS and logging capabilities the GUI library calls into
//!
//! The library runs happily without an RTOS or a log sink as long as these
//! hooks exist. [`SingleTask`] and [`NullLog`] are the defaults; a
//! scheduler-backed implementation can replace them without touching the
//! exported hook functions.

/// Task id reported by [`SingleTask`]
pub const SINGLE_TASK_ID: u32 = 1;

/// Locking and event primitives for multi-task library use
pub trait GuiOs {
    /// Create whatever the lock and event primitives need
    fn init(&mut self);

    /// Enter the library's critical section
    fn lock(&mut self);

    /// Leave the library's critical section
    fn unlock(&mut self);

    /// Identifier of the calling task
    fn task_id(&self) -> u32;

    /// Block until [`GuiOs::signal_event`] is called
    fn wait_event(&mut self);

    /// Block until an event is signalled or `period_ms` elapses
    fn wait_event_timed(&mut self, period_ms: i32);

    /// Wake a task blocked in one of the wait calls
    fn signal_event(&mut self);
}

/// Single-threaded, cooperative-free environment
///
/// Every operation is a no-op and there is exactly one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleTask;

impl GuiOs for SingleTask {
    fn init(&mut self) {}

    fn lock(&mut self) {}

    fn unlock(&mut self) {}

    fn task_id(&self) -> u32 {
        SINGLE_TASK_ID
    }

    fn wait_event(&mut self) {}

    fn wait_event_timed(&mut self, _period_ms: i32) {}

    fn signal_event(&mut self) {}
}

/// Sink for the library's diagnostic messages
pub trait GuiLog {
    fn log(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error_out(&self, msg: &str);
}

/// Discards all library messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLog;

impl GuiLog for NullLog {
    fn log(&self, _msg: &str) {}

    fn warn(&self, _msg: &str) {}

    fn error_out(&self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_task_reports_one_task() {
        let mut os = SingleTask;
        os.init();
        os.lock();
        assert_eq!(os.task_id(), SINGLE_TASK_ID);
        os.unlock();
    }

    #[test]
    fn test_single_task_waits_never_block() {
        let mut os = SingleTask;
        os.wait_event();
        os.wait_event_timed(1000);
        os.signal_event();
    }
}
