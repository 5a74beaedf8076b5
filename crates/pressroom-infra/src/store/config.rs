use std::path::PathBuf;
use std::str::FromStr;

/// What a store does when the collection file is missing, unreadable, or
/// fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadErrorPolicy {
    /// Log a warning and behave as if the collection were empty.
    /// A mutation after such a read overwrites the unreadable file.
    #[default]
    EmptyCollection,
    /// Surface the failure as `RepoError::Read`.
    Fail,
}

impl FromStr for ReadErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "empty_collection" | "emptycollection" => Ok(Self::EmptyCollection),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown read error policy: {}", other)),
        }
    }
}

/// Configuration for the JSON file post store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub on_read_error: ReadErrorPolicy,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            on_read_error: ReadErrorPolicy::default(),
        }
    }

    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.on_read_error = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_error_policy() {
        assert_eq!("empty".parse::<ReadErrorPolicy>(), Ok(ReadErrorPolicy::EmptyCollection));
        assert_eq!(" FAIL ".parse::<ReadErrorPolicy>(), Ok(ReadErrorPolicy::Fail));
        assert!("panic".parse::<ReadErrorPolicy>().is_err());
    }

    #[test]
    fn test_default_policy_is_empty_collection() {
        let config = StoreConfig::new("posts.json");
        assert_eq!(config.on_read_error, ReadErrorPolicy::EmptyCollection);
    }
}
