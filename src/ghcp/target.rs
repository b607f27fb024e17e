//! Identity wrappers for the comment target and credentials.

use super::error::CommentsProxyError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CommentsProxyError::MissingOwner` when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CommentsProxyError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentsProxyError::MissingOwner);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CommentsProxyError::MissingRepository` when the supplied
    /// string is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CommentsProxyError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentsProxyError::MissingRepository);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number, carried as text.
///
/// The proxy schema declares the field as a string and performs numeric
/// validation on the server side, so the client forwards the configured
/// value verbatim rather than round-tripping it through an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestNumber(String);

impl PullRequestNumber {
    /// Validates that the pull request number is non-empty and trims
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CommentsProxyError::MissingPullRequestNumber` when the
    /// supplied string is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CommentsProxyError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentsProxyError::MissingPullRequestNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the pull request number text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Bearer token wrapper enforcing presence.
///
/// The proxy accepts both personal access tokens and GitHub Actions OIDC
/// tokens; either way the credential is opaque here, so no format checks
/// apply beyond non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CommentsProxyError::MissingToken` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, CommentsProxyError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentsProxyError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Validated pull request targeted by a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTarget {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl CommentTarget {
    /// Assembles a target from owner, repository, and pull request number.
    ///
    /// # Errors
    ///
    /// Returns the corresponding `Missing*` variant when any part is blank.
    pub fn new(
        owner: impl AsRef<str>,
        repository: impl AsRef<str>,
        number: impl AsRef<str>,
    ) -> Result<Self, CommentsProxyError> {
        Ok(Self::from_parts(
            RepositoryOwner::new(owner)?,
            RepositoryName::new(repository)?,
            PullRequestNumber::new(number)?,
        ))
    }

    /// Assembles a target from already-validated parts.
    #[must_use]
    pub const fn from_parts(
        owner: RepositoryOwner,
        repository: RepositoryName,
        number: PullRequestNumber,
    ) -> Self {
        Self {
            owner,
            repository,
            number,
        }
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> &PullRequestNumber {
        &self.number
    }
}
