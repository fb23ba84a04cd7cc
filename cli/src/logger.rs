use log::{LevelFilter, Log, Metadata, Record};

pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{level}][{target}] {message}",
                level = record.level(),
                target = record.target(),
                message = record.args()
            );
        }
    }

    fn flush(&self) {}
}

// Initialize the logger
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    static LOGGER: StderrLogger = StderrLogger;

    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
