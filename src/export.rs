//! Semicolon-delimited export of resolved paper records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::PaperRecord;

/// Header written as the first line of every export
const HEADER: &str = "title;ID";

/// Write records to `path`, one line per record after the header.
///
/// Overwrites any existing file. Fields are joined with `;` and are not
/// escaped, so a literal `;` inside a title shifts columns.
pub fn write_records(path: &Path, records: &[PaperRecord]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "{}", HEADER)?;
    for record in records {
        writeln!(file, "{};{}", record.title, record.id)?;
    }

    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExternalId;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_header_only_when_no_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        write_records(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "title;ID\n");
    }

    #[test]
    fn test_one_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        let records = vec![
            PaperRecord::new("Deep Learning Survey", ExternalId::Doi("10.1000/xyz".into())),
            PaperRecord::new(
                "Preprint Only",
                ExternalId::Other(json!({"ArXiv": "2101.00001"})),
            ),
        ];
        write_records(&path, &records).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "title;ID\n\
             Deep Learning Survey;10.1000/xyz\n\
             Preprint Only;{\"ArXiv\":\"2101.00001\"}\n"
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("papers.csv");
        fs::write(&path, "stale contents\nmore stale\n").unwrap();

        let records = vec![PaperRecord::new("A", ExternalId::Doi("10.1/a".into()))];
        write_records(&path, &records).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "title;ID\nA;10.1/a\n");
    }
}
