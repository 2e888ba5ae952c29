//! Credentials and credential providers.
//!
//! [`ProvideCredentials`] is the seam clients resolve credentials through.
//! The stock chain tries the environment first and then the shared
//! credentials file, the same order the AWS CLI uses.

use std::{
    env, fmt,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use ini::Ini;
use tracing::debug;

use crate::error::AuthError;

/// Profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "default";

/// An AWS access key pair, optionally with a session token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Create credentials from their parts.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// The access key ID.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret access key.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// The session token of temporary credentials.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Source of credentials for signing.
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    /// Resolve credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotFound`] when this source has nothing
    /// to offer, or a more specific error when it is misconfigured.
    fn provide(&self) -> Result<Credentials, AuthError>;
}

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    credentials: Credentials,
}

impl StaticProvider {
    /// Wrap fixed credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticProvider {
    fn provide(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, and `AWS_SESSION_TOKEN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentProvider;

impl EnvironmentProvider {
    fn from_lookup<F>(lookup: F) -> Result<Credentials, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let access_key_id = var("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| AuthError::CredentialsNotFound("AWS_ACCESS_KEY_ID is not set".into()))?;
        let secret_access_key = var("AWS_SECRET_ACCESS_KEY").ok_or_else(|| {
            AuthError::CredentialsNotFound("AWS_SECRET_ACCESS_KEY is not set".into())
        })?;
        Ok(Credentials::new(
            access_key_id,
            secret_access_key,
            var("AWS_SESSION_TOKEN"),
        ))
    }
}

impl ProvideCredentials for EnvironmentProvider {
    fn provide(&self) -> Result<Credentials, AuthError> {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

/// Reads a profile from the shared credentials file.
///
/// The file is read and parsed on the first call to
/// [`provide`](ProvideCredentials::provide); later calls reuse the result.
#[derive(Clone)]
pub struct ProfileProvider {
    path: Option<PathBuf>,
    profile: String,
    file: OnceLock<Result<Ini, AuthError>>,
}

impl fmt::Debug for ProfileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileProvider")
            .field("path", &self.path)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl Default for ProfileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileProvider {
    /// Provider for `AWS_PROFILE` (or `default`) in `AWS_SHARED_CREDENTIALS_FILE`
    /// (or `~/.aws/credentials`).
    #[must_use]
    pub fn new() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let path = var("AWS_SHARED_CREDENTIALS_FILE").map(PathBuf::from).or_else(|| {
            var("HOME")
                .or_else(|| var("USERPROFILE"))
                .map(|home| PathBuf::from(home).join(".aws").join("credentials"))
        });
        let profile = var("AWS_PROFILE").unwrap_or_else(|| DEFAULT_PROFILE.to_owned());
        Self {
            path,
            profile,
            file: OnceLock::new(),
        }
    }

    /// Read from `path` instead.
    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self.file = OnceLock::new();
        self
    }

    /// Use `profile` instead.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    fn load(path: Option<&Path>) -> Result<Ini, AuthError> {
        let Some(path) = path else {
            return Err(AuthError::CredentialsNotFound(
                "no home directory to locate the shared credentials file".into(),
            ));
        };
        if !path.exists() {
            return Err(AuthError::CredentialsNotFound(format!(
                "{} does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "Loading shared credentials file");
        Ini::load_from_file(path).map_err(|e| AuthError::CredentialsFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ProvideCredentials for ProfileProvider {
    fn provide(&self) -> Result<Credentials, AuthError> {
        let conf = self
            .file
            .get_or_init(|| Self::load(self.path.as_deref()))
            .as_ref()
            .map_err(Clone::clone)?;
        let section = conf.section(Some(self.profile.as_str())).ok_or_else(|| {
            AuthError::CredentialsNotFound(format!(
                "profile {:?} not found in the shared credentials file",
                self.profile,
            ))
        })?;

        let required = |key: &'static str| {
            section
                .get(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AuthError::IncompleteProfile {
                    profile: self.profile.clone(),
                    key,
                })
        };
        let access_key_id = required("aws_access_key_id")?;
        let secret_access_key = required("aws_secret_access_key")?;
        let session_token = section
            .get("aws_session_token")
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());

        Ok(Credentials::new(
            access_key_id,
            secret_access_key,
            session_token,
        ))
    }
}

/// Tries each provider in order and returns the first success.
///
/// A provider answering [`AuthError::CredentialsNotFound`] is skipped; any
/// other error stops the chain, so a broken credentials file is reported
/// rather than silently ignored.
#[derive(Debug)]
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideCredentials>>,
}

impl ChainProvider {
    /// Build a chain from explicit providers.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn ProvideCredentials>>) -> Self {
        Self { providers }
    }

    /// Environment, then the shared credentials file (using `profile` when
    /// given).
    #[must_use]
    pub fn default_chain(profile: Option<&str>) -> Self {
        let mut file = ProfileProvider::new();
        if let Some(profile) = profile {
            file = file.with_profile(profile);
        }
        Self::new(vec![Box::new(EnvironmentProvider), Box::new(file)])
    }
}

impl ProvideCredentials for ChainProvider {
    fn provide(&self) -> Result<Credentials, AuthError> {
        let mut reasons = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.provide() {
                Ok(credentials) => {
                    debug!(?provider, "Resolved credentials");
                    return Ok(credentials);
                }
                Err(AuthError::CredentialsNotFound(reason)) => reasons.push(reason),
                Err(e) => return Err(e),
            }
        }
        Err(AuthError::CredentialsNotFound(reasons.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use super::*;

    fn credentials_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_should_redact_secrets_in_debug_output() {
        let creds = Credentials::new("AKID", "super-secret", Some("tok".into()));
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("tok\""));
    }

    #[test]
    fn test_should_read_credentials_from_environment_lookup() {
        let vars: HashMap<&str, &str> = [
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", ""),
        ]
        .into_iter()
        .collect();
        let creds =
            EnvironmentProvider::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned()))
                .unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.secret_access_key(), "secret");
        assert_eq!(creds.session_token(), None);
    }

    #[test]
    fn test_should_report_missing_environment_credentials() {
        let result = EnvironmentProvider::from_lookup(|_| None);
        assert!(matches!(result, Err(AuthError::CredentialsNotFound(_))));
    }

    #[test]
    fn test_should_read_named_profile() {
        let file = credentials_file(
            "[default]\naws_access_key_id = AKID1\naws_secret_access_key = secret1\n\n\
             [first]\naws_access_key_id = AKID2\naws_secret_access_key = secret2\n\
             aws_session_token = token2\n",
        );
        let provider = ProfileProvider::new().with_path(file.path());

        let creds = provider.clone().with_profile("default").provide().unwrap();
        assert_eq!(creds.access_key_id(), "AKID1");

        let creds = provider.with_profile("first").provide().unwrap();
        assert_eq!(creds.access_key_id(), "AKID2");
        assert_eq!(creds.secret_access_key(), "secret2");
        assert_eq!(creds.session_token(), Some("token2"));
    }

    #[test]
    fn test_should_reject_incomplete_profile() {
        let file = credentials_file("[default]\naws_access_key_id = AKID1\n");
        let result = ProfileProvider::new()
            .with_path(file.path())
            .with_profile("default")
            .provide();
        assert!(matches!(
            result,
            Err(AuthError::IncompleteProfile {
                key: "aws_secret_access_key",
                ..
            })
        ));
    }

    #[test]
    fn test_should_report_missing_profile_as_not_found() {
        let file = credentials_file("[default]\naws_access_key_id = A\naws_secret_access_key = B\n");
        let result = ProfileProvider::new()
            .with_path(file.path())
            .with_profile("nope")
            .provide();
        assert!(matches!(result, Err(AuthError::CredentialsNotFound(_))));
    }

    #[test]
    fn test_should_read_credentials_file_once() {
        let file = credentials_file("[default]\naws_access_key_id = AKID1\naws_secret_access_key = s\n");
        let provider = ProfileProvider::new().with_path(file.path()).with_profile("default");
        assert_eq!(provider.provide().unwrap().access_key_id(), "AKID1");

        std::fs::write(file.path(), "[default]\naws_access_key_id = AKID2\naws_secret_access_key = s\n")
            .unwrap();
        assert_eq!(provider.provide().unwrap().access_key_id(), "AKID1");

        let reloaded = provider.with_path(file.path());
        assert_eq!(reloaded.provide().unwrap().access_key_id(), "AKID2");
    }

    #[test]
    fn test_should_report_missing_home_as_not_found() {
        let provider = ProfileProvider::from_lookup(|_| None);
        assert!(provider.path.is_none());
        assert!(matches!(
            provider.provide(),
            Err(AuthError::CredentialsNotFound(_))
        ));
    }

    #[test]
    fn test_should_locate_credentials_under_home() {
        let vars: HashMap<&str, &str> = [("HOME", "/home/alice"), ("AWS_PROFILE", "dev")]
            .into_iter()
            .collect();
        let provider =
            ProfileProvider::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned()));
        assert_eq!(
            provider.path.as_deref(),
            Some(Path::new("/home/alice/.aws/credentials"))
        );
        assert_eq!(provider.profile, "dev");
    }

    #[test]
    fn test_should_fall_through_chain_to_first_success() {
        let missing = ProfileProvider::new().with_path("/definitely/not/here");
        let fixed = StaticProvider::new(Credentials::new("AKID", "secret", None));
        let chain = ChainProvider::new(vec![Box::new(missing), Box::new(fixed)]);
        assert_eq!(chain.provide().unwrap().access_key_id(), "AKID");
    }

    #[test]
    fn test_should_stop_chain_on_broken_profile() {
        let file = credentials_file("[default]\naws_access_key_id = AKID1\n");
        let broken = ProfileProvider::new()
            .with_path(file.path())
            .with_profile("default");
        let fixed = StaticProvider::new(Credentials::new("AKID", "secret", None));
        let chain = ChainProvider::new(vec![Box::new(broken), Box::new(fixed)]);
        assert!(matches!(
            chain.provide(),
            Err(AuthError::IncompleteProfile { .. })
        ));
    }

    #[test]
    fn test_should_fail_empty_chain() {
        let chain = ChainProvider::new(vec![]);
        assert!(matches!(
            chain.provide(),
            Err(AuthError::CredentialsNotFound(_))
        ));
    }
}
