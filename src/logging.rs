use std::io::Write as _;

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger::fmt::Color;

/// Installs the stderr logger. `RUST_LOG` overrides `default_level`.
///
/// Only problems are coloured; progress lines stay plain so they read like
/// the solver's status output.
pub fn init(default_level: LevelFilter) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(default_level);
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut style = buf.style();
        match record.level() {
            Level::Error => style.set_color(Color::Red).set_bold(true),
            Level::Warn => style.set_color(Color::Yellow),
            _ => &mut style,
        };
        writeln!(
            buf,
            "{} {} [{}] {}",
            buf.timestamp(),
            style.value(record.level()),
            record.target(),
            record.args()
        )
    });

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}
