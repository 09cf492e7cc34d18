//! Downsampling of raw OHLC series into chart points.

use super::wire::{HistoryResponse, RawHistoryPoint};
use super::ChartPoint;
use crate::error::DataError;

/// Downsample a raw history payload into at most `columns` chart points.
///
/// `limit` is the number of samples originally requested from the upstream
/// feed, not the count actually returned; the stride between kept samples is
/// `limit / columns`. Samples are kept on the stride counting backwards from
/// the most recent one, so the newest sample always survives. Each kept
/// sample becomes the midpoint of its low and high, in chronological order.
///
/// `columns == 0` keeps every sample, and so does a stride of zero (fewer
/// samples requested than columns).
pub fn format_chart(
    response: &HistoryResponse,
    limit: u32,
    columns: u32,
) -> Result<Vec<ChartPoint>, DataError> {
    let data = validate(response)?;
    Ok(downsample(data, limit, columns)
        .into_iter()
        .map(|point| ChartPoint {
            price: (point.low + point.high) / 2.0,
            time: point.time,
        })
        .collect())
}

fn validate(response: &HistoryResponse) -> Result<&[RawHistoryPoint], DataError> {
    if response.response.as_deref() == Some("Error") {
        return Err(DataError::BadEnvelope {
            message: response
                .message
                .clone()
                .unwrap_or_else(|| "upstream returned an error status".to_string()),
        });
    }
    response
        .data
        .as_deref()
        .ok_or_else(|| DataError::BadEnvelope {
            message: "history response carries no data array".to_string(),
        })
}

fn downsample(data: &[RawHistoryPoint], limit: u32, columns: u32) -> Vec<&RawHistoryPoint> {
    let stride = if columns == 0 {
        0
    } else {
        (limit / columns) as usize
    };
    if stride == 0 {
        return data.iter().collect();
    }

    let mut kept: Vec<&RawHistoryPoint> = data
        .iter()
        .rev()
        .enumerate()
        .filter(|(idx, _)| idx % stride == 0)
        .map(|(_, point)| point)
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: i64, low: f64, high: f64) -> RawHistoryPoint {
        RawHistoryPoint {
            time,
            high,
            low,
            open: 0.0,
            close: 0.0,
            volume_from: 0.0,
            volume_to: 0.0,
        }
    }

    fn success(data: Vec<RawHistoryPoint>) -> HistoryResponse {
        HistoryResponse {
            response: Some("Success".to_string()),
            message: None,
            data: Some(data),
        }
    }

    #[test]
    fn test_zero_columns_keeps_every_point_in_order() {
        let resp = success(vec![point(1, 10.0, 20.0), point(2, 20.0, 30.0)]);
        let chart = format_chart(&resp, 24, 0).unwrap();
        assert_eq!(
            chart,
            vec![
                ChartPoint { price: 15.0, time: 1 },
                ChartPoint { price: 25.0, time: 2 },
            ]
        );
    }

    #[test]
    fn test_downsamples_to_column_count() {
        let data: Vec<_> = (0..24).map(|i| point(i, 10.0, 20.0)).collect();
        let chart = format_chart(&success(data), 24, 12).unwrap();
        assert_eq!(chart.len(), 12);
        // newest sample survives; points stay chronological
        assert_eq!(chart.last().unwrap().time, 23);
        assert!(chart.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn test_stride_counts_back_from_most_recent() {
        let data: Vec<_> = (0..24).map(|i| point(i, 10.0, 20.0)).collect();
        let chart = format_chart(&success(data), 24, 12).unwrap();
        let times: Vec<i64> = chart.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23]);
    }

    #[test]
    fn test_limit_below_columns_keeps_every_point() {
        let data: Vec<_> = (0..7).map(|i| point(i, 10.0, 20.0)).collect();
        let chart = format_chart(&success(data), 7, 12).unwrap();
        assert_eq!(chart.len(), 7);
    }

    #[test]
    fn test_price_is_low_high_midpoint() {
        let resp = success(vec![point(9, 980.0, 1097.54)]);
        let chart = format_chart(&resp, 1, 0).unwrap();
        assert_eq!(chart[0].price, (980.0 + 1097.54) / 2.0);
    }

    #[test]
    fn test_error_envelope_fails() {
        let resp = HistoryResponse {
            response: Some("Error".to_string()),
            message: Some("limit param is not valid".to_string()),
            data: None,
        };
        let err = format_chart(&resp, 24, 12).unwrap_err();
        assert!(matches!(err, DataError::BadEnvelope { ref message } if message.contains("limit")));
    }

    #[test]
    fn test_missing_data_field_fails_even_on_success_status() {
        let resp = HistoryResponse {
            response: Some("Success".to_string()),
            message: None,
            data: None,
        };
        assert!(format_chart(&resp, 24, 12).is_err());
    }

    #[test]
    fn test_missing_response_field_counts_as_success() {
        let resp = HistoryResponse {
            response: None,
            message: None,
            data: Some(vec![point(1, 1.0, 3.0)]),
        };
        let chart = format_chart(&resp, 1, 0).unwrap();
        assert_eq!(chart, vec![ChartPoint { price: 2.0, time: 1 }]);
    }

    #[test]
    fn test_empty_data_yields_empty_chart() {
        let chart = format_chart(&success(vec![]), 24, 12).unwrap();
        assert!(chart.is_empty());
    }
}
