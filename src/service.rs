use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::client::NwsClient;
use crate::config::WeatherConfig;
use crate::constants::{
    ALERTS_UNAVAILABLE, FORECAST_PERIOD_LIMIT, FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS,
    POINTS_UNAVAILABLE,
};
use crate::error::WeatherError;
use crate::formatters::{format_alert, format_period, join_blocks};
use crate::models::{
    AlertFeature, ForecastPeriod, ForecastResponse, GetAlertsRequest, GetForecastRequest,
    PointsResponse,
};

/// Weather tool server, registered with the host as the "weather" tool group
#[derive(Clone)]
pub struct Weather {
    client: Arc<NwsClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = NwsClient::new(&config)?;

        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// Fetches a JSON object, logging and discarding the reason on failure.
    /// An empty object counts as no data.
    async fn fetch(&self, url: &str) -> Option<Map<String, Value>> {
        match self.client.fetch_json(url).await {
            Ok(data) if data.is_empty() => {
                tracing::warn!("Empty response from {}", url);
                None
            }
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                None
            }
        }
    }

    /// Active alerts for a region code, one block per alert
    pub async fn alerts(&self, state: &str) -> Result<String, WeatherError> {
        let url = format!("{}/alerts/activate/area/{}", self.client.base_url(), state);

        let Some(data) = self.fetch(&url).await else {
            return Ok(ALERTS_UNAVAILABLE.to_string());
        };

        let Some(features) = data.get("features") else {
            return Ok(ALERTS_UNAVAILABLE.to_string());
        };

        if is_blank(features) {
            return Ok(NO_ACTIVE_ALERTS.to_string());
        }

        let features = Vec::<Value>::deserialize(features).map_err(|source| {
            WeatherError::Malformed {
                what: "alerts response",
                source,
            }
        })?;

        let blocks = features
            .iter()
            .map(|feature| {
                AlertFeature::deserialize(feature)
                    .map(|feature| format_alert(&feature.properties))
                    .map_err(|source| WeatherError::Malformed {
                        what: "alert feature",
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Formatted {} alerts for {}", blocks.len(), state);
        Ok(join_blocks(&blocks))
    }

    /// Forecast for coordinates: resolves the grid point, then formats the
    /// first periods of its forecast
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let points_url = format!("{}/points/{},{}", self.client.base_url(), latitude, longitude);

        let Some(points) = self.fetch(&points_url).await else {
            return Ok(POINTS_UNAVAILABLE.to_string());
        };

        let points: PointsResponse =
            serde_json::from_value(Value::Object(points)).map_err(|source| {
                WeatherError::Malformed {
                    what: "points response",
                    source,
                }
            })?;

        let Some(forecast) = self.fetch(&points.properties.forecast).await else {
            return Ok(FORECAST_UNAVAILABLE.to_string());
        };

        let forecast: ForecastResponse =
            serde_json::from_value(Value::Object(forecast)).map_err(|source| {
                WeatherError::Malformed {
                    what: "forecast response",
                    source,
                }
            })?;

        let blocks = forecast
            .properties
            .periods
            .iter()
            .take(FORECAST_PERIOD_LIMIT)
            .map(|period| {
                ForecastPeriod::deserialize(period)
                    .map(|period| format_period(&period))
                    .map_err(|source| WeatherError::Malformed {
                        what: "forecast period",
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(join_blocks(&blocks))
    }
}

/// Null, false, zero, and empty strings, lists or objects carry no alerts
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts for US locations from the National Weather \
                Service API. Use get_alerts with a two-letter state code, or get_forecast \
                with latitude and longitude."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter US state code (e.g. CA, NY).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.alerts(&request.state).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a location
    #[tool(description = "Get weather forecast for a location. Provide the latitude and longitude of the location.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast(request.latitude, request.longitude).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_both_tools() {
        let mut names: Vec<String> = Weather::tool_router()
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["get_alerts", "get_forecast"]);
    }

    #[test]
    fn blank_feature_values() {
        use serde_json::json;

        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_blank(&value), "{value} should be blank");
        }
        for value in [json!(true), json!(1), json!("x"), json!([{}]), json!({"a": 1})] {
            assert!(!is_blank(&value), "{value} should not be blank");
        }
    }

    #[test]
    fn server_info_names_weather_group() {
        let weather = Weather::new(WeatherConfig::default()).expect("service builds");
        let info = weather.get_info();
        assert_eq!(info.server_info.name, "weather");
        assert!(info.capabilities.tools.is_some());
    }
}
