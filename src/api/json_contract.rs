use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::WaterfallChartConfig;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: WaterfallChartConfig,
}

impl WaterfallChartConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = WaterfallChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned v1 contract payload, then
    /// validates it.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<Self>(input) {
            Ok(config) => config,
            Err(bare_err) => {
                let payload: WaterfallChartConfigJsonContractV1 = serde_json::from_str(input)
                    .map_err(|e| {
                        ChartError::InvalidConfig(format!(
                            "failed to parse chart config json: {bare_err}; as contract v1: {e}"
                        ))
                    })?;
                if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidConfig(format!(
                        "unsupported chart config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        config.validate()?;
        Ok(config)
    }
}
