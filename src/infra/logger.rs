use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Overrides the `-v` count when set, using `env_logger` filter syntax.
pub const LOG_LEVEL_ENV: &str = "CODEBASE_TXT_LOG_LEVEL";

/// Maps the `-v` count to a level; errors only without the flag.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let default_filter = level_for(verbosity).to_string().to_lowercase();
    let env = Env::default().filter_or(LOG_LEVEL_ENV, default_filter);

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{style}[{:<5}]{style:#} [{}] {}: {}",
                record.level(),
                buf.timestamp_seconds(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Error);
        assert_eq!(level_for(1), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Info);
        assert_eq!(level_for(3), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_setup_logger() {
        INIT.call_once(|| {
            assert!(setup_logger(0).is_ok());
        });
    }
}
