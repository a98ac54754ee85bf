use async_trait::async_trait;
use chrono::NaiveDate;

use tucash_core::dashboard::{CategoryLeaks, DashboardClientTrait, DashboardPulse, TrendSeries};
use tucash_core::errors::Result;
use tucash_core::utils::format_api_date;

use crate::client::ApiClient;

fn date_params(from_date: Option<NaiveDate>, to_date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(from) = from_date {
        params.push(("fromDate", format_api_date(from)));
    }
    if let Some(to) = to_date {
        params.push(("toDate", format_api_date(to)));
    }
    params
}

#[async_trait]
impl DashboardClientTrait for ApiClient {
    async fn get_pulse(
        &self,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<DashboardPulse> {
        self.get_with_query("/dashboard/pulse", &date_params(from_date, to_date))
            .await
    }

    async fn get_trends(&self, months: u32) -> Result<TrendSeries> {
        self.get_with_query("/dashboard/trends", &[("months", months.to_string())])
            .await
    }

    async fn get_leaks(
        &self,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
        top: usize,
    ) -> Result<CategoryLeaks> {
        let mut params = vec![("top", top.to_string())];
        params.extend(date_params(from_date, to_date));
        self.get_with_query("/dashboard/leaks", &params).await
    }
}
