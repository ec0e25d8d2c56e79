//! Opt-in timing diagnostics.
//!
//! Disabled by default. Set `STATLAB_PROFILE=1` (or call [`enable`]) and every
//! [`ProfileScope`] reports its wall-clock time on stderr when dropped:
//!
//! ```text
//! [PROFILE] bootstrap_statistics (1000 draws x 10 values) took 0.412ms
//! ```
//!
//! ```
//! use statlab_core::profiling::ProfileScope;
//!
//! fn expensive() {
//!     let _scope = ProfileScope::new("expensive");
//!     // work; timing is reported on drop
//! }
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(false);

static TOTAL_SCOPES: AtomicU64 = AtomicU64::new(0);

/// Read `STATLAB_PROFILE` and enable profiling if it is `1` or `true`.
///
/// Call once at program startup.
pub fn init() {
    let enabled = std::env::var("STATLAB_PROFILE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if enabled {
        enable();
    }
}

pub fn enable() {
    if !PROFILING_ENABLED.swap(true, Ordering::Relaxed) {
        eprintln!("[PROFILE] enabled");
    }
}

#[inline]
pub fn is_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Times the enclosing scope; reports on drop when profiling is enabled.
pub struct ProfileScope {
    name: &'static str,
    detail: Option<String>,
    start: Instant,
}

impl ProfileScope {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        TOTAL_SCOPES.fetch_add(1, Ordering::Relaxed);
        Self {
            name,
            detail: None,
            start: Instant::now(),
        }
    }

    /// Scope with extra context. `detail` is only built when profiling is on.
    pub fn with_detail<F>(name: &'static str, detail: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let mut scope = Self::new(name);
        if is_enabled() {
            scope.detail = Some(detail());
        }
        scope
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        if is_enabled() {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            match &self.detail {
                Some(detail) => eprintln!("[PROFILE] {} ({detail}) took {ms:.3}ms", self.name),
                None => eprintln!("[PROFILE] {} took {ms:.3}ms", self.name),
            }
        }
    }
}

/// Number of scopes opened since startup.
pub fn total_scopes() -> u64 {
    TOTAL_SCOPES.load(Ordering::Relaxed)
}
