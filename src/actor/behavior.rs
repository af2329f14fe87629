//! Actor domain: behaviors that can be switched on and off.

/// A behavior component that participates in "enable everything" passes.
///
/// Implemented explicitly by every component whose systems honor an enabled
/// flag, so enabling an actor is a fixed list of direct calls.
pub trait Toggle {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}
