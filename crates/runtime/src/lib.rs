mod config;
pub mod logging;

pub use config::{
    COLLATION_ENV_VARS, EXCLUDE_EXTENSIONS_ENV, EXCLUDE_PATHS_ENV, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME, collation_language, default_browse_root, env_excluded_extensions,
    env_excluded_paths,
};

pub use logging::init;
