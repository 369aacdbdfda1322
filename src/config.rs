use std::path::PathBuf;

/// Service configuration for the catalog server
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Catalog JSON file; `None` means the bundled dataset
    pub data_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            data_file: None,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration listening on the given port
    pub fn new(http_port: u16) -> Self {
        Self {
            http_port,
            ..Default::default()
        }
    }

    /// Use a catalog file instead of the bundled dataset
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Bind address for the HTTP listener
    pub fn http_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}
