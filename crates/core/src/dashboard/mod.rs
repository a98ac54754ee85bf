//! Dashboard module - period windows, pulse, trends and spending leaks.

mod dashboard_aggregator;
mod dashboard_model;
mod dashboard_traits;


pub use dashboard_aggregator::{
    balances_by_currency, category_leaks, chart_split, filter_by_date_range,
    income_and_expenses, monthly_trends, pulse, savings_rate,
};
pub use dashboard_model::{
    CategoryLeak, CategoryLeaks, ChartSplit, CurrencyBalance, DashboardPulse, DateRange,
    MonthlyTrend, Period, TrendSeries,
};
pub use dashboard_traits::DashboardClientTrait;
