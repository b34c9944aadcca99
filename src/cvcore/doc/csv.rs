use super::Posting;
use crate::cvcore::error::{MatchError, Result};
use csv::ReaderBuilder;

// accepted header spellings, compared case-insensitively
const TITLE_COLUMNS: &[&str] = &["title"];
const DESCRIPTION_COLUMNS: &[&str] = &["description", "job description"];

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
}

/// Parses job postings from CSV text with `Title` and `Description` columns.
/// Rows without a description are dropped before preprocessing, not
/// zero-filled.
pub fn parse_csv(content: &str) -> Result<Vec<Posting>> {
    let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| MatchError::Corpus(e.to_string()))?
        .clone();
    let title_at = find_column(&headers, TITLE_COLUMNS)
        .ok_or_else(|| MatchError::Corpus("missing title column".to_string()))?;
    let description_at = find_column(&headers, DESCRIPTION_COLUMNS)
        .ok_or_else(|| MatchError::Corpus("missing description column".to_string()))?;

    let mut postings = vec![];
    for (n, record) in reader.records().enumerate() {
        let record = record.map_err(|e| MatchError::Corpus(e.to_string()))?;
        let title = record.get(title_at).unwrap_or("").trim();
        let description = record.get(description_at).unwrap_or("").trim();
        if description.is_empty() {
            log::warn!("row {}: no description, dropped", n + 2);
            continue;
        }
        postings.push(Posting::new(title.to_string(), description.to_string()));
    }
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let content = "\
Title,Description
Backend Engineer,Build distributed systems with Kubernetes
Data Engineer,Write Python scripts for data pipelines
";
        let postings = parse_csv(content).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title(), "Backend Engineer");
        assert_eq!(
            postings[1].description(),
            "Write Python scripts for data pipelines"
        );
    }

    #[test]
    fn test_parse_csv_drops_rows_without_description() {
        let content = "\
Title,Description
Backend Engineer,Build distributed systems
Ghost Role,
Data Engineer,Write Python scripts
";
        let postings = parse_csv(content).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[1].title(), "Data Engineer");
    }

    #[test]
    fn test_parse_csv_job_description_header() {
        let content = "\
Title,Job Description
Backend Engineer,Build distributed systems
";
        let postings = parse_csv(content).unwrap();
        assert_eq!(postings.len(), 1);
    }

    #[test]
    fn test_parse_csv_missing_columns() {
        let content = "Role,Summary\nEngineer,Build things\n";
        assert!(matches!(parse_csv(content), Err(MatchError::Corpus(_))));
    }

    #[test]
    fn test_parse_csv_quoted_fields() {
        let content = "\
Title,Description
\"Engineer, Backend\",\"Design, build and operate services\"
";
        let postings = parse_csv(content).unwrap();
        assert_eq!(postings[0].title(), "Engineer, Backend");
        assert_eq!(postings[0].description(), "Design, build and operate services");
    }
}
