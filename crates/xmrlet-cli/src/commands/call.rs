//! `xmrlet call`: call any registered method with JSON params.
//!
//! Unknown method names and params that do not fit the method are rejected
//! before anything is sent.

use serde_json::Value;
use xmrlet_core::config::Config;

use super::connect;

pub async fn run(
    config: &Config,
    method: &str,
    params: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_params(params)?;
    let dispatcher = connect(config)?;
    let payload = dispatcher.call_raw(method, params).await?;
    println!("{}", serde_json::to_string_pretty(&payload.to_value()?)?);
    Ok(())
}

fn parse_params(raw: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
    let Some(raw) = raw else {
        return Ok(Value::Null);
    };
    let value: Value =
        serde_json::from_str(raw).map_err(|e| format!("--params is not valid JSON: {e}"))?;
    if !value.is_object() {
        return Err("--params must be a JSON object".into());
    }
    Ok(value)
}
