//! Typed command surface for interactive chart controls.
//!
//! The embedding UI exposes a small set of chart actions (auto-rotate,
//! camera reset, save, download). Rather than a shared mutable control
//! object, the renderer holds a [`ControlDispatcher`] and routes actions
//! through it.

/// An action the user can trigger on a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Toggle camera auto-rotation.
    RotateToggle,
    /// Reset the camera to the layout's initial pose.
    Reset,
    /// Save the current chart to the user's history.
    Save,
    /// Download the chart as an image.
    Download,
}

impl ControlAction {
    /// All actions, in the order the UI lists them.
    pub const ALL: [ControlAction; 4] = [
        ControlAction::RotateToggle,
        ControlAction::Reset,
        ControlAction::Save,
        ControlAction::Download,
    ];

    /// Route this action to its handler.
    pub fn dispatch(&self, dispatcher: &dyn ControlDispatcher) {
        match self {
            ControlAction::RotateToggle => dispatcher.on_rotate_toggle(),
            ControlAction::Reset => dispatcher.on_reset(),
            ControlAction::Save => dispatcher.on_save(),
            ControlAction::Download => dispatcher.on_download(),
        }
    }
}

/// Handler for chart control actions.
pub trait ControlDispatcher {
    fn on_rotate_toggle(&self);
    fn on_reset(&self);
    fn on_save(&self);
    fn on_download(&self);
}

/// Dispatcher that ignores every action; useful for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

impl ControlDispatcher for NoopDispatcher {
    fn on_rotate_toggle(&self) {}
    fn on_reset(&self) {}
    fn on_save(&self) {}
    fn on_download(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        resets: Cell<u32>,
        saves: Cell<u32>,
    }

    impl ControlDispatcher for Recorder {
        fn on_rotate_toggle(&self) {}
        fn on_reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
        fn on_save(&self) {
            self.saves.set(self.saves.get() + 1);
        }
        fn on_download(&self) {}
    }

    #[test]
    fn test_dispatch_routes() {
        let recorder = Recorder::default();
        ControlAction::Reset.dispatch(&recorder);
        ControlAction::Reset.dispatch(&recorder);
        ControlAction::Save.dispatch(&recorder);
        assert_eq!(recorder.resets.get(), 2);
        assert_eq!(recorder.saves.get(), 1);
    }

    #[test]
    fn test_noop_dispatcher_accepts_all() {
        for action in ControlAction::ALL {
            action.dispatch(&NoopDispatcher);
        }
    }
}
