use std::path::PathBuf;

use clap::Parser;

use crate::api::TRENDING_ENDPOINT;
use crate::credentials::{CookieFile, CredentialProvider, StaticToken};
use crate::state::ResponsePolicy;
use crate::theme::Theme;

macro_rules! arg_env {
    ($v:literal) => {
        concat!("TRENDING_", $v)
    };
}

/// Desktop client showing the trending videos of the video API
#[derive(Parser, Debug)]
pub struct Args {
    /// Trending videos endpoint
    #[arg(long, default_value = TRENDING_ENDPOINT, env = arg_env!("ENDPOINT"))]
    pub endpoint: String,

    /// Cookie file holding `jwt_token`, either Netscape cookies.txt or `name=value` pairs.
    /// Defaults to `<config dir>/trending-videos/cookies.txt`
    #[arg(long, env = arg_env!("COOKIES"))]
    pub cookies: Option<PathBuf>,

    /// Bearer token to use instead of reading the cookie file
    #[arg(long, env = arg_env!("TOKEN"), hide_env_values = true)]
    pub token: Option<String>,

    /// Start with the light theme
    #[arg(long, env = arg_env!("LIGHT"))]
    pub light: bool,

    /// Ignore responses of fetches superseded by a retry
    #[arg(long, env = arg_env!("DISCARD_STALE"))]
    pub discard_stale: bool,

    /// Maximum log level
    #[arg(long, default_value_t = tracing::Level::INFO, env = arg_env!("LOG_LEVEL"))]
    pub log_level: tracing::Level,
}

impl Args {
    pub fn theme(&self) -> Theme {
        Theme {
            is_dark_theme: !self.light,
        }
    }

    pub fn response_policy(&self) -> ResponsePolicy {
        if self.discard_stale {
            ResponsePolicy::DiscardStale
        } else {
            ResponsePolicy::LastWriteWins
        }
    }

    pub fn cookie_path(&self) -> PathBuf {
        self.cookies.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trending-videos")
                .join("cookies.txt")
        })
    }

    pub fn credentials(&self) -> Box<dyn CredentialProvider> {
        match &self.token {
            Some(token) => Box::new(StaticToken(Some(token.clone()))),
            None => Box::new(CookieFile::new(self.cookie_path())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["trending_videos"]).unwrap();
        assert_eq!(args.endpoint, TRENDING_ENDPOINT);
        assert!(args.theme().is_dark_theme);
        assert_eq!(args.response_policy(), ResponsePolicy::LastWriteWins);
        assert_eq!(args.log_level, tracing::Level::INFO);
        assert!(args.cookie_path().ends_with("trending-videos/cookies.txt"));
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "trending_videos",
            "--light",
            "--discard-stale",
            "--token",
            "abc",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(!args.theme().is_dark_theme);
        assert_eq!(args.response_policy(), ResponsePolicy::DiscardStale);
        assert_eq!(args.log_level, tracing::Level::DEBUG);
        assert_eq!(args.credentials().bearer_token().as_deref(), Some("abc"));
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
