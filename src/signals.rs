use core::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

static SIGINT: AtomicBool = AtomicBool::new(false);

pub fn received_ctrl_c() -> bool {
    SIGINT.load(Ordering::SeqCst)
}

/// Installs a handler that makes running simulations stop before their next
/// removal.
pub fn initialize() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        SIGINT.store(true, Ordering::SeqCst);
    })
}
