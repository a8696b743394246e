use std::{fmt, path::PathBuf, time::Duration};

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPENAI_IMAGES_URL: &str = "https://api.openai.com/v1/images/generations";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub openai_api_key: Option<String>,
    pub openai_images_url: Option<String>,
    pub openai_timeout_secs: Option<u64>,

    pub public_dir: Option<String>,
    pub body_limit_bytes: Option<usize>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        return self.port.unwrap_or(DEFAULT_PORT);
    }

    /// The upstream credential, treating an empty value as unset.
    pub fn openai_api_key(&self) -> Option<&str> {
        return self
            .openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty());
    }

    pub fn openai_images_url(&self) -> &str {
        return self
            .openai_images_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_IMAGES_URL);
    }

    pub fn openai_timeout(&self) -> Duration {
        return Duration::from_secs(
            self.openai_timeout_secs
                .unwrap_or(DEFAULT_OPENAI_TIMEOUT_SECS),
        );
    }

    pub fn public_dir(&self) -> PathBuf {
        return PathBuf::from(self.public_dir.as_deref().unwrap_or(DEFAULT_PUBLIC_DIR));
    }

    pub fn body_limit_bytes(&self) -> usize {
        return self.body_limit_bytes.unwrap_or(DEFAULT_BODY_LIMIT_BYTES);
    }
}

// keeps the api key out of logs
impl fmt::Debug for Envy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envy")
            .field("port", &self.port)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_images_url", &self.openai_images_url)
            .field("openai_timeout_secs", &self.openai_timeout_secs)
            .field("public_dir", &self.public_dir)
            .field("body_limit_bytes", &self.body_limit_bytes)
            .finish()
    }
}
