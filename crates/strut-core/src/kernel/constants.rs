/// Application name
pub const APP_NAME: &str = "Strut";

/// Application version
pub const APP_VERSION: &str = "0.1.0";

/// Directory under the application root where plugins live
pub const PLUGINS_DIR_NAME: &str = "api";

/// Conventional spec file name, looked up relative to the directory being
/// scanned (the plugins root for plugin ordering, a plugin directory for
/// component ordering)
pub const SPEC_FILE_NAME: &str = "spec.json";
