//! Domain layer constants

/// Separator placed between injector names in a hierarchy path string
pub const HIERARCHY_PATH_SEPARATOR: &str = " > ";

/// Default bound on ancestry walks before a hierarchy is treated as cyclic
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 64;

/// Label carried by the synthetic root of every usage tree
pub const USAGE_ROOT_LABEL: &str = "";
