use std::sync::atomic::{AtomicBool, Ordering};

/// Whether a child currently owns the terminal. The Ctrl-C handler stays
/// quiet while this is set and lets the child take the signal.
static FOREGROUND: AtomicBool = AtomicBool::new(false);

pub fn set_foreground(active: bool) {
    FOREGROUND.store(active, Ordering::SeqCst);
}

pub fn foreground_active() -> bool {
    FOREGROUND.load(Ordering::SeqCst)
}
