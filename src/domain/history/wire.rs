//! Wire types for the history endpoints.

use serde::Deserialize;

/// Raw history payload envelope.
///
/// A missing `Response` field counts as success; only an explicit error
/// status rejects the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "Data")]
    pub data: Option<Vec<RawHistoryPoint>>,
}

/// One raw OHLC sample.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHistoryPoint {
    pub time: i64,
    pub high: f64,
    pub low: f64,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub close: f64,
    #[serde(rename = "volumefrom", default)]
    pub volume_from: f64,
    #[serde(rename = "volumeto", default)]
    pub volume_to: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_success_payload() {
        let json = r#"{
            "Response": "Success",
            "Type": 100,
            "Data": [
                {"time": 1500000000, "high": 2750.85, "low": 2644.31, "open": 2700.0, "close": 2730.4, "volumefrom": 1294.8, "volumeto": 3497873.9}
            ]
        }"#;
        let resp: HistoryResponse = serde_json::from_str(json).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].time, 1500000000);
        assert_eq!(data[0].low, 2644.31);
        assert_eq!(data[0].volume_from, 1294.8);
    }

    #[test]
    fn test_missing_response_field_parses() {
        let json = r#"{"Data": [{"time": 1, "high": 2.0, "low": 1.0}]}"#;
        let resp: HistoryResponse = serde_json::from_str(json).unwrap();
        assert!(resp.response.is_none());
        assert_eq!(resp.data.unwrap().len(), 1);
    }
}
