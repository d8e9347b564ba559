use core::sync::atomic::AtomicBool;
use core::time;
use std::io;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Instant;

static TIMEOUT: AtomicBool = AtomicBool::new(false);

/// Spawns a watcher thread that raises the timeout flag once `max_duration`
/// seconds have passed.
pub fn initialize_timeout(max_duration: u64) -> io::Result<()> {
    let start_time = Instant::now();
    let max_duration = time::Duration::from_secs(max_duration);
    thread::Builder::new()
        .name("timeout".into())
        .spawn(move || {
            while start_time.elapsed() <= max_duration {
                thread::sleep(time::Duration::from_millis(10));
            }
            TIMEOUT.store(true, Ordering::SeqCst);
        })
        .map(|_| ())
}

pub fn timeout() -> bool {
    TIMEOUT.load(Ordering::SeqCst)
}
