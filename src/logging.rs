use env_logger::WriteStyle;
use log::LevelFilter;
use std::io::Write;

/// Installs a global `env_logger` with the solver's prefix format.
///
/// Returns an error if another logger is already set.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[GS | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .try_init()
}
