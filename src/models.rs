use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// One entry of the `features` list in an alerts response
#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

/// Absent and `null` fields both deserialize to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the forecast for this grid point
    pub forecast: String,
}

/// Periods stay raw so entries past the period limit are never parsed.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: Number,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    #[schemars(description = "Two-letter US state code (e.g. CA, NY)")]
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_alert_fields_are_absent() {
        let feature: AlertFeature = serde_json::from_value(json!({
            "properties": { "event": "Flood Warning", "instruction": null }
        }))
        .unwrap();
        assert_eq!(feature.properties.event.as_deref(), Some("Flood Warning"));
        assert!(feature.properties.instruction.is_none());
        assert!(feature.properties.area_desc.is_none());
    }

    #[test]
    fn alert_feature_requires_properties() {
        assert!(serde_json::from_value::<AlertFeature>(json!({ "id": "x" })).is_err());
    }

    #[test]
    fn forecast_period_requires_every_field() {
        let err = serde_json::from_value::<ForecastPeriod>(json!({
            "name": "Tonight",
            "temperature": 55,
            "temperatureUnit": "F",
            "windSpeed": "5 mph",
            "windDirection": "SW"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("detailedForecast"));
    }

    #[test]
    fn forecast_request_schema_lists_coordinates() {
        let schema = serde_json::to_value(schemars::schema_for!(GetForecastRequest)).unwrap();
        let props = &schema["properties"];
        assert!(props.get("latitude").is_some());
        assert!(props.get("longitude").is_some());
    }
}
