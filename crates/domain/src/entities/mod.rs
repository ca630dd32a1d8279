//! Domain entities

mod forecast_report;

pub use forecast_report::{ForecastReport, Temperature};
