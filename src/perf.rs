//! Handler timing.
//!
//! Pointer handlers open a `profile_scope!` at entry. Without the `profiling`
//! feature the macro expands to nothing; with it, a handler that overruns its
//! budget logs a warning:
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Budget for a single event handler, in milliseconds
pub const HANDLER_BUDGET_MS: f64 = 4.0;

/// Time the rest of the enclosing scope under `name`.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::HandlerTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use crate::profile_scope;

/// Logs on drop how long its handler ran.
pub struct HandlerTimer {
    name: &'static str,
    start: Instant,
}

impl HandlerTimer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for HandlerTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > HANDLER_BUDGET_MS {
            warn!(handler = self.name, elapsed_ms = elapsed, "Handler over budget");
        } else {
            trace!(handler = self.name, elapsed_ms = elapsed, "Handler timing");
        }
    }
}
