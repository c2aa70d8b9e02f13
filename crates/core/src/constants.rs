/// Constants used throughout the credbroker codebase
// Built-in provider names
pub const LITERAL_PROVIDER: &str = "literal";
pub const ENV_PROVIDER: &str = "env";
pub const FILE_PROVIDER: &str = "file";

// Environment variable names
pub const CREDBROKER_CONFIG_VAR: &str = "CREDBROKER_CONFIG";
pub const CREDBROKER_LOG_VAR: &str = "CREDBROKER_LOG";

// Configuration file lookup
pub const CONFIG_DIR_NAME: &str = "credbroker";
pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

// Default log level when neither config nor environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
