//! Logger setup.
//!
//! The game owns the terminal (alternate screen), so log output goes to a
//! file instead of stderr.  `RUST_LOG` picks the level; default is `info`.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Install the global logger, appending to `path`.  If the file can't be
/// opened, logging is left off and the reason goes to stderr; call this
/// before the terminal switches to the alternate screen so it stays visible.
pub fn init(path: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("sky_dodger: not logging, cannot open {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
    {
        eprintln!("sky_dodger: logger already installed: {}", e);
    }
}
