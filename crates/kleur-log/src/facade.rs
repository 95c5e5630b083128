//! Bridge from the `log` crate macros to the global context.

use log::{Log, Metadata, Record};

use crate::level::Level;
use crate::LogError;

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        crate::global().enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        let level = Level::from(record.level());
        if crate::global().enabled(level) {
            // log::Log has no error channel.
            let _ = crate::global().emit(level, record.args());
        }
    }

    fn flush(&self) {
        let _ = crate::global().flush();
    }
}

/// Routes `log::error!`, `log::warn!`, `log::info!`, `log::debug!` and
/// `log::trace!` through the global context.
///
/// `trace` is written as `DEBUG`. The `log` max level is opened fully so that
/// the context's own threshold is the only filter.
pub fn init() -> Result<(), LogError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
