//! CSV import of candidate sites for batch comparison.
//!
//! Expected headers: `address,area,monthly_rent,traffic,location,customer_match,heat,cost,competition`.

use crate::comparison::CandidateSite;
use crate::scoring::DimensionScores;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read candidate file: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateSite>, CandidateImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateSite>, CandidateImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates = Vec::new();

        for record in csv_reader.deserialize::<CandidateRow>() {
            candidates.push(record?.into());
        }

        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    address: String,
    area: f64,
    monthly_rent: f64,
    traffic: u8,
    location: u8,
    customer_match: u8,
    heat: u8,
    cost: u8,
    competition: u8,
}

impl From<CandidateRow> for CandidateSite {
    fn from(row: CandidateRow) -> Self {
        CandidateSite {
            address: row.address,
            area: row.area,
            monthly_rent: row.monthly_rent,
            dimension_scores: DimensionScores {
                traffic: row.traffic,
                location: row.location,
                customer_match: row.customer_match,
                heat: row.heat,
                cost: row.cost,
                competition: row.competition,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
address,area,monthly_rent,traffic,location,customer_match,heat,cost,competition
 中山路8号 , 80, 30000, 8, 6, 7, 5, 9, 6
人民路12号,120.5,36000,6,9,7,8,5,7
";

    #[test]
    fn parses_trimmed_rows() {
        let candidates =
            CandidateImporter::from_reader(Cursor::new(SAMPLE)).expect("sample parses");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].address, "中山路8号");
        assert_eq!(candidates[0].area, 80.0);
        assert_eq!(candidates[0].dimension_scores.traffic, 8);
        assert_eq!(candidates[1].area, 120.5);
        assert_eq!(candidates[1].dimension_scores.competition, 7);
    }

    #[test]
    fn out_of_range_scores_parse_and_are_left_to_the_scorer() {
        let csv = "address,area,monthly_rent,traffic,location,customer_match,heat,cost,competition\nA,10,100,0,5,5,5,5,11\n";
        let candidates = CandidateImporter::from_reader(Cursor::new(csv)).expect("parses");
        assert_eq!(candidates[0].dimension_scores.traffic, 0);
        assert_eq!(candidates[0].dimension_scores.competition, 11);
    }

    #[test]
    fn reports_malformed_numbers() {
        let csv = "address,area,monthly_rent,traffic,location,customer_match,heat,cost,competition\nA,ten,100,5,5,5,5,5,5\n";
        let err = CandidateImporter::from_reader(Cursor::new(csv)).expect_err("bad area");
        assert!(matches!(err, CandidateImportError::Csv(_)));
        assert!(err.to_string().starts_with("invalid candidate CSV data"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CandidateImporter::from_path("/nonexistent/candidates.csv")
            .expect_err("missing file");
        assert!(matches!(err, CandidateImportError::Io(_)));
    }
}
