// Route path constants - single source of truth for all fixture paths

pub const ROOT: &str = "/";
pub const GOODBYE: &str = "/goodbye";
pub const HEALTH: &str = "/health";
