use std::path::PathBuf;

/// Cookie holding the API bearer token
pub const JWT_COOKIE: &str = "jwt_token";

/// Source of the bearer token sent to the video API
pub trait CredentialProvider: Send + Sync {
    /// Current token, if any. Read again for every request.
    fn bearer_token(&self) -> Option<String>;
}

/// Reads a named cookie from a cookie file on disk
pub struct CookieFile {
    path: PathBuf,
    name: String,
}

impl CookieFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: JWT_COOKIE.to_string(),
        }
    }
}

impl CredentialProvider for CookieFile {
    fn bearer_token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => find_cookie(&contents, &self.name),
            Err(e) => {
                tracing::debug!("no cookie file at {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// A fixed token, e.g. given on the command line
pub struct StaticToken(pub Option<String>);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Looks up `name` in either a Netscape `cookies.txt` or plain `name=value` pairs
pub fn find_cookie(contents: &str, name: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // domain, subdomains, path, secure, expiry, name, value
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == 7 {
            if fields[5] == name {
                return Some(fields[6].to_string());
            }
            continue;
        }

        for pair in line.split(';') {
            if let Some((key, value)) = pair.split_once('=') {
                if key.trim() == name {
                    return Some(value.trim().to_string());
                }
            }
        }
    }
    None
}
