//! Record sources: where the employee list comes from.
//!
//! The list is loaded exactly once at start-up through [`load_records`], which
//! is also the one place where a failed load turns into an empty list.
//!
//! Accepted payloads (HTTP body or file contents):
//! - a bare JSON array of employees
//! - an object holding that array under `employees`, `data` or `results`

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::BusinessConfig;
use crate::employee::Employee;
use crate::http::{Client, HttpError};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("API returned status: {status}")]
    Status { status: u16 },

    #[error("Failed to parse employees payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EmployeesPayload {
    List(Vec<Employee>),
    Wrapped {
        #[serde(alias = "data", alias = "results")]
        employees: Vec<Employee>,
    },
}

impl From<EmployeesPayload> for Vec<Employee> {
    fn from(payload: EmployeesPayload) -> Self {
        match payload {
            EmployeesPayload::List(employees) | EmployeesPayload::Wrapped { employees } => {
                employees
            }
        }
    }
}

/// Decodes any accepted payload shape.
pub fn parse_employees(bytes: &[u8]) -> Result<Vec<Employee>, SourceError> {
    let payload: EmployeesPayload = serde_json::from_slice(bytes)?;
    Ok(payload.into())
}

/// Something that can produce the employee list.
#[async_trait]
pub trait RecordSource: Send + Sync + Debug {
    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Employee>, SourceError>;
}

/// Loads the records once, swallowing any failure into an empty list.
pub async fn load_records(source: &dyn RecordSource) -> Vec<Employee> {
    match source.fetch().await {
        Ok(records) => {
            log::debug!(
                "Loaded {} employees from {}",
                records.len(),
                source.describe()
            );
            records
        }
        Err(e) => {
            log::warn!(
                "Failed to load employees from {}: {e}; showing an empty list",
                source.describe()
            );
            Vec::new()
        }
    }
}

/// `GET {api_base_url}/employees`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    url: String,
}

impl HttpRecordSource {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            url: config.employees_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Employee>, SourceError> {
        let response = Client::get(&self.url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.is_success() {
            return Err(SourceError::Status {
                status: response.status,
            });
        }

        parse_employees(&response.body)
    }
}

/// Reads the employee list from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Employee>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_employees(&bytes)
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<Employee>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    async fn fetch(&self) -> Result<Vec<Employee>, SourceError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let employees =
            parse_employees(br#"[{"firstName":"Anna"},{"firstName":"Bob"}]"#).expect("parse");
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].first_name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_parse_wrapped_shapes() {
        for key in ["employees", "data", "results"] {
            let body = format!(r#"{{"{key}":[{{"firstName":"Anna"}}],"total":1}}"#);
            let employees = parse_employees(body.as_bytes()).expect("parse");
            assert_eq!(employees, vec![Employee {
                first_name: Some("Anna".to_owned()),
                ..Employee::default()
            }]);
        }
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_employees(br#"{"items":[]}"#),
            Err(SourceError::Decode(_))
        ));
        assert!(parse_employees(b"not json").is_err());
    }

    #[test]
    fn test_status_error_message() {
        let err = SourceError::Status { status: 503 };
        assert_eq!(err.to_string(), "API returned status: 503");
    }

    #[test]
    fn test_http_source_uses_employees_url() {
        let source = HttpRecordSource::new(&BusinessConfig::new("https://hr.example.com/api"));
        assert_eq!(source.url(), "https://hr.example.com/api/employees");
        assert_eq!(source.describe(), "https://hr.example.com/api/employees");
    }

    #[tokio::test]
    async fn test_static_source_returns_records_in_order() {
        let source = StaticRecordSource::new(vec![
            Employee::named("Zed", "Z"),
            Employee::named("Amy", "A"),
        ]);
        let records = load_records(&source).await;
        assert_eq!(records[0].first_name.as_deref(), Some("Zed"));
        assert_eq!(records[1].first_name.as_deref(), Some("Amy"));
    }

    #[tokio::test]
    async fn test_missing_file_loads_as_empty() {
        let source = FileRecordSource::new("/definitely/not/here/employees.json");
        assert!(matches!(source.fetch().await, Err(SourceError::Io { .. })));
        assert!(load_records(&source).await.is_empty());
    }
}
