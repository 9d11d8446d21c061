use super::validation::ValidationError;
use std::fmt;

/// Direction of a criterion: whether larger values make an alternative
/// better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// `+`: higher is better (benefit criterion)
    Beneficial,
    /// `-`: lower is better (cost criterion)
    Cost,
}

impl Impact {
    /// Parse a single impact token. Only `+` and `-` are recognized.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        match token.trim() {
            "+" => Ok(Impact::Beneficial),
            "-" => Ok(Impact::Cost),
            other => Err(ValidationError::BadImpact {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Beneficial => write!(f, "+"),
            Impact::Cost => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_beneficial() {
        assert_eq!(Impact::parse("+").unwrap(), Impact::Beneficial);
        assert_eq!(Impact::parse(" + ").unwrap(), Impact::Beneficial);
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(Impact::parse("-").unwrap(), Impact::Cost);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        for bad in ["max", "plus", "", "+-", "1"] {
            let err = Impact::parse(bad).unwrap_err();
            assert!(matches!(err, ValidationError::BadImpact { .. }));
        }
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Impact::Beneficial.to_string(), "+");
        assert_eq!(Impact::Cost.to_string(), "-");
    }
}
