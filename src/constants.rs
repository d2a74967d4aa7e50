/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "org";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "movi";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "movi_sort";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without moving any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the verify command-line option
pub const VERIFY_HELP: &str = "Check the dataset layout instead of organising files";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file next to the binary instead of the config directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "movi.yaml";

/// Starter configuration written on first run
pub const DEFAULT_CONFIG_TEMPLATE: &str = "\
# movi_sort configuration
#
# root:  dataset root that will hold AMASS/, Calib/, V3D/ and Videos/
# inbox: directory the MoVi archives were extracted into
root: ~/MoVi
inbox: ~/MoVi/inbox
copy: false
ignore:
  - '*.md5'
";

/// Default name for the log file
pub const LOG_FILE_DEFAULT: &str = "movi_sort.log";

/// Frame rate the MoVi motion capture data was recorded at
pub const MOCAP_FPS: u32 = 120;
