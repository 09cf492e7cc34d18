//! History sub-client — fetch and downsample chart series.

use crate::client::CryptoCompareClient;
use crate::domain::history::{format_chart, ChartPoint, DEFAULT_COLUMNS, MAX_LIMIT};
use crate::error::SdkError;
use crate::shared::{HistoryPeriod, Symbol};

/// Sub-client for chart history operations.
pub struct History<'a> {
    pub(crate) client: &'a CryptoCompareClient,
}

impl<'a> History<'a> {
    /// Fetch a pair's chart for one period, downsampled to the default
    /// column count.
    pub async fn chart(
        &self,
        base: &Symbol,
        quote: &Symbol,
        period: HistoryPeriod,
    ) -> Result<Vec<ChartPoint>, SdkError> {
        self.chart_with_columns(base, quote, period, DEFAULT_COLUMNS)
            .await
    }

    /// Fetch a pair's chart with an explicit column count. `columns == 0`
    /// keeps every sample.
    pub async fn chart_with_columns(
        &self,
        base: &Symbol,
        quote: &Symbol,
        period: HistoryPeriod,
        columns: u32,
    ) -> Result<Vec<ChartPoint>, SdkError> {
        let limit = period.limit().min(MAX_LIMIT);
        let resp = self
            .client
            .http
            .history(period.function(), base.as_str(), quote.as_str(), limit)
            .await?;
        Ok(format_chart(&resp, limit, columns)?)
    }
}
