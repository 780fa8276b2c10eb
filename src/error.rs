pub type RondoResult<T> = Result<T, RondoError>;

#[derive(Debug, thiserror::Error)]
pub enum RondoError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("zero total duration: {0}")]
    ZeroDuration(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RondoError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn zero_duration(msg: impl Into<String>) -> Self {
        Self::ZeroDuration(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert_eq!(
            RondoError::configuration("bad slide").to_string(),
            "configuration error: bad slide"
        );
        assert_eq!(
            RondoError::zero_duration("empty cycle").to_string(),
            "zero total duration: empty cycle"
        );
        assert_eq!(
            RondoError::serde("bad json").to_string(),
            "serialization error: bad json"
        );
    }

    #[test]
    fn other_preserves_source() {
        let err: RondoError = anyhow::anyhow!("io gone wrong").into();
        assert!(err.to_string().contains("io gone wrong"));
    }
}
