use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;


/// Cooperative cancellation shared by the sampler and the renderer.
///
/// Both loops observe the token at fixed points: the sampler after each
/// sleep, the renderer after each input poll. Stopping is sticky.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Process signals asking the monitor to quit.
///
/// In raw terminal mode `Ctrl-C` arrives as a key press, these cover
/// `kill` and interrupts delivered while the terminal is not in raw mode.
pub mod signal {
    use std::sync::atomic::{AtomicBool, Ordering};

    static CAUGHT: AtomicBool = AtomicBool::new(false);

    extern "C" fn interrupt(_sig: libc::c_int) {
        CAUGHT.store(true, Ordering::SeqCst);
    }

    /// Installs the quit handler for `sigs`.
    pub fn watch_for(sigs: &[libc::c_int]) {
        let handler = interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
        for sig in sigs {
            unsafe {
                libc::signal(*sig, handler);
            }
        }
    }

    /// Whether a watched signal has been delivered.
    pub fn caught() -> bool {
        CAUGHT.load(Ordering::SeqCst)
    }
}
