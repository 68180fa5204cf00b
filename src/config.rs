use std::env;
use std::fmt;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://www.warcraftlogs.com/api/v2/client";
pub const DEFAULT_AUTH_URL: &str = "https://www.warcraftlogs.com/oauth/token";

/// Guild id used when `WARCRAFT_LOGS_GUILD_ID` is missing or not a number.
/// Guild-scoped fetches refuse to send it upstream.
pub const NO_GUILD: i64 = -1;

/// Holds the application's configuration values.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub guild_id: i64,
    pub bot_token: Option<String>,
    pub api_url: String,
    pub auth_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("auth_url", &self.auth_url)
            .finish()
    }
}

impl Config {
    /// Loads a `.env` file when one exists, then reads the environment.
    pub fn from_env() -> Result<Self> {
        // A missing .env is fine, the variables may come from the real environment.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
        };

        let client_id = required("WARCRAFT_LOGS_CLIENT_ID")?;
        let client_secret = required("WARCRAFT_LOGS_SECRET")?;

        let guild_id = lookup("WARCRAFT_LOGS_GUILD_ID")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(NO_GUILD);

        let bot_token = lookup("BOT_TOKEN").filter(|v| !v.trim().is_empty());
        let api_url = lookup("WARCRAFT_LOGS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let auth_url =
            lookup("WARCRAFT_LOGS_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());

        Ok(Config {
            client_id,
            client_secret,
            guild_id,
            bot_token,
            api_url,
            auth_url,
        })
    }

    pub fn has_guild(&self) -> bool {
        self.guild_id != NO_GUILD
    }
}
