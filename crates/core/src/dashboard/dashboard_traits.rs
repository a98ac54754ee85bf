use async_trait::async_trait;
use chrono::NaiveDate;

use super::dashboard_model::{CategoryLeaks, DashboardPulse, TrendSeries};
use crate::errors::Result;

/// Server-side analytics under `/dashboard`.
#[async_trait]
pub trait DashboardClientTrait: Send + Sync {
    /// Income, expenses and savings rate between the optional bounds. The
    /// backend defaults to the current month.
    async fn get_pulse(
        &self,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<DashboardPulse>;
    async fn get_trends(&self, months: u32) -> Result<TrendSeries>;
    async fn get_leaks(
        &self,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
        top: usize,
    ) -> Result<CategoryLeaks>;
}
