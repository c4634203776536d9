use serde::{Deserialize, Serialize};

/// Corpus-wide headline numbers, as aggregated by the backend.
///
/// The client never computes these values; it only validates and displays them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Number of publication records in the corpus.
    pub total_records: u64,

    /// Share of records with publicly available code, in `[0, 100]`.
    pub open_code_percentage: f64,

    /// Share of records with publicly available data, in `[0, 100]`.
    pub open_data_percentage: f64,

    /// Number of distinct journals in the corpus.
    pub unique_journals: u64,

    /// Number of distinct affiliation countries in the corpus.
    pub unique_countries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let summary = MetricsSummary::default();
        assert_eq!(summary.total_records, 0);
        assert!(summary.open_code_percentage.abs() < f64::EPSILON);
        assert!(summary.open_data_percentage.abs() < f64::EPSILON);
        assert_eq!(summary.unique_journals, 0);
        assert_eq!(summary.unique_countries, 0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let summary: MetricsSummary = serde_json::from_str(
            r#"{"totalRecords":1200,"openCodePercentage":12.5,"openDataPercentage":30.25,"uniqueJournals":87,"uniqueCountries":41}"#,
        )
        .unwrap();

        assert_eq!(summary.total_records, 1200);
        assert!((summary.open_code_percentage - 12.5).abs() < f64::EPSILON);
        assert!((summary.open_data_percentage - 30.25).abs() < f64::EPSILON);
        assert_eq!(summary.unique_journals, 87);
        assert_eq!(summary.unique_countries, 41);
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let result: Result<MetricsSummary, _> = serde_json::from_str(r#"{"totalRecords":1}"#);
        let _ = result.unwrap_err();
    }
}
