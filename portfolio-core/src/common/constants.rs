/// Collection names as they appear in the document store
pub const PORTFOLIO_CONFIG_COLLECTION: &str = "portfolio_config";
pub const EXPERIENCES_COLLECTION: &str = "experiences";
pub const PROJECTS_COLLECTION: &str = "projects";
pub const TECH_STACK_COLLECTION: &str = "tech_stack";
pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

/// Tech-stack categories surfaced in the composite portfolio response.
///
/// Categories stored under any other name are dropped from `techStack`.
/// The built-in seed content also carries `cloud`, which this list leaves out.
pub const KNOWN_TECH_CATEGORIES: &[&str] = &[
    "frontend",
    "performance",
    "backend",
    "tools",
    "methodologies",
];

/// Upper bound on status entries returned by a single listing
pub const STATUS_LIST_LIMIT: usize = 1000;

pub const NOT_FOUND_MESSAGE: &str = "Portfolio not found";
