use std::path::Path;

use crewplan_core::{CrewplanError, Employee};

/// Read the employees file: a JSON array of employee records.
pub fn load_employees(path: &Path) -> Result<Vec<Employee>, CrewplanError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            CrewplanError::NotFound(format!("employees file {}", path.display()))
        }
        _ => CrewplanError::InvalidInput(format!("read {}: {e}", path.display())),
    })?;
    serde_json::from_str(&content)
        .map_err(|e| CrewplanError::Malformed(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_array() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("employees.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ada", "role": "Backend", "skills": ["rust"]},
                {"name": "Lin", "role": "Design", "my_work": "ui"}]"#,
        )
        .unwrap();

        let employees = load_employees(&path).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].skills, vec!["rust".to_string()]);
        assert_eq!(employees[1].my_work, "ui");
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_employees(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CrewplanError::NotFound(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("employees.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_employees(&path).unwrap_err();
        assert!(matches!(err, CrewplanError::Malformed(_)));
    }
}
