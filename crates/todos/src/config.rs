use std::env;

/// Storage configuration loaded from environment variables.
///
/// Read once at startup and passed explicitly to the repository constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the to-do items (default: "todos")
    pub table_name: String,
    /// Secondary index keyed by `userId` (default: "todos-user-index")
    pub index_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL, e.g. DynamoDB Local at `http://localhost:8000`
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - Table name (default: "todos")
    /// - `TODOS_INDEX` - Owner index name (default: "todos-user-index")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TODOS_TABLE").unwrap_or_else(|_| "todos".to_string()),
            index_name: env::var("TODOS_INDEX")
                .unwrap_or_else(|_| "todos-user-index".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
