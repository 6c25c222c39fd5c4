use serde::Deserialize;

use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::MessageResponse;

impl CoolifyClient {
    /// Version string of the platform, e.g. `4.0.0-beta.360`.
    ///
    /// Accepts both a bare JSON string and a `{"version": ...}` object.
    pub fn version(&self) -> Result<String> {
        let body: VersionBody = self.get("/version")?;
        Ok(body.into())
    }

    /// Enable the API. Requires root permissions.
    pub fn enable_api(&self) -> Result<MessageResponse> {
        self.get("/enable")
    }

    /// Disable the API. Requires root permissions.
    pub fn disable_api(&self) -> Result<MessageResponse> {
        self.get("/disable")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VersionBody {
    Bare(String),
    Object { version: String },
}

impl From<VersionBody> for String {
    fn from(body: VersionBody) -> Self {
        match body {
            VersionBody::Bare(version) | VersionBody::Object { version } => version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_body_accepts_both_shapes() {
        for raw in [r#""4.0.0""#, r#"{"version":"4.0.0"}"#] {
            let body: VersionBody = serde_json::from_str(raw).unwrap();
            assert_eq!(String::from(body), "4.0.0");
        }
        assert!(serde_json::from_str::<VersionBody>(r#"{"tag":"4.0.0"}"#).is_err());
    }
}
