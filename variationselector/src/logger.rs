use fern::Dispatch;
use log::{LevelFilter, SetLoggerError};
use std::io;

/// Maps a `-v` style verbosity count to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error, // default
        1 => LevelFilter::Warn,  // -v
        2 => LevelFilter::Info,  // -vv
        3 => LevelFilter::Debug, // -vvv
        _ => LevelFilter::Trace, // -vvvv
    }
}

/// Installs a terminal logger for hosts that do not bring their own.
///
/// The library itself only emits records through the `log` facade.
/// Fails if a global logger is already set.
pub fn init_logger(verbose: u8) -> Result<(), SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_for(verbose))
        .chain(io::stdout())
        .apply()
}
