//! Application services

mod forecast_service;
mod weather_replies;

pub use forecast_service::ForecastService;
pub use weather_replies::{FORECAST_FAILURE_REPLY, WeatherReplyService, parse_chat_request};
