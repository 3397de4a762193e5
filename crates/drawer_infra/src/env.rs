use std::path::PathBuf;

use drawer_domain::{Environment, EnvironmentService};

pub const DOCUMENTS_DIR_VAR: &str = "DRAWER_DOCUMENTS_DIR";
pub const RESOURCES_DIR_VAR: &str = "DRAWER_RESOURCES_DIR";
pub const LIBRARY_DIR_VAR: &str = "DRAWER_LIBRARY_DIR";
pub const TEMP_DIR_VAR: &str = "DRAWER_TEMP_DIR";

/// Resolves the four roots from the host, with per-root overrides read from
/// the process environment (and `.env`, when present).
#[derive(Default)]
pub struct DrawerEnvironmentService;

impl DrawerEnvironmentService {
    pub fn new() -> Self {
        Self
    }

    fn get(&self) -> Environment {
        dotenv::dotenv().ok();
        resolve(|key| std::env::var(key).ok())
    }
}

impl EnvironmentService for DrawerEnvironmentService {
    fn get_environment(&self) -> Environment {
        self.get()
    }
}

/// Builds the environment, taking overrides from `lookup` and falling back to
/// the platform's conventional locations.
fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Environment {
    let overridden = |key: &str| lookup(key).filter(|value| !value.is_empty()).map(PathBuf::from);
    let home = dirs::home_dir().unwrap_or(PathBuf::from("."));

    let documents_dir = overridden(DOCUMENTS_DIR_VAR)
        .or_else(dirs::document_dir)
        .unwrap_or_else(|| home.join("Documents"));

    let resources_dir = overridden(RESOURCES_DIR_VAR).unwrap_or_else(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or(PathBuf::from("."))
    });

    let library_dir = overridden(LIBRARY_DIR_VAR).unwrap_or_else(|| {
        dirs::data_dir()
            .map(|dir| dir.join("drawer"))
            .unwrap_or_else(|| home.join(".drawer").join("Library"))
    });

    let temp_dir = overridden(TEMP_DIR_VAR).unwrap_or_else(std::env::temp_dir);

    Environment { documents_dir, resources_dir, library_dir, temp_dir }
}
