use std::{fs::File, io, path::Path};

use env_logger::{Env, Target};
use log::{warn, LevelFilter};

/// Where log records go. A file keeps them off the alternate screen.
pub fn log_target(path: &Path) -> Result<Target, io::Error> {
    File::create(path).map(|file| Target::Pipe(Box::new(file)))
}

/// Initialises `env_logger` (`RUST_LOG`, default `info`) against `path`.
///
/// If the file cannot be created, a single warning is written to stderr
/// before the terminal switches screens and logging is then turned off.
/// Startup continues either way.
pub fn init(path: &Path) {
    let env = Env::default().default_filter_or("info");

    match log_target(path) {
        Ok(target) => env_logger::Builder::from_env(env).target(target).init(),
        Err(e) => {
            env_logger::Builder::from_env(env)
                .target(Target::Stderr)
                .init();
            warn!(
                "cannot create log file {}: {e}; logging disabled",
                path.display()
            );
            log::set_max_level(LevelFilter::Off);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writable_path_logs_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.log");

        assert!(matches!(log_target(&path), Ok(Target::Pipe(_))));
        assert!(path.exists());
    }

    #[test]
    fn directory_in_the_way_is_an_error_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.log");
        std::fs::create_dir(&path).unwrap();

        assert!(log_target(&path).is_err());
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/dashboard.log");

        assert!(log_target(&path).is_err());
    }
}
