use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::BarChartConfig;
use super::validation::validate_config;

pub const BAR_CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: BarChartConfig,
}

impl BarChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BarChartConfigJsonContractV1 {
            schema_version: BAR_CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract envelope.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: BarChartConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse config contract: {e}"))
                })?;
            if payload.schema_version != BAR_CHART_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            })?
        };

        validate_config(&config)?;
        Ok(config)
    }
}
