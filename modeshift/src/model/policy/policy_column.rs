use crate::model::mode::Mode;
use std::fmt::Display;
use std::str::FromStr;

/// The survey column a scenario perturbs: one alternative's cost or time,
/// or the shared income column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyColumn {
    Cost(Mode),
    Time(Mode),
    Income,
}

impl Display for PolicyColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyColumn::Cost(mode) => write!(f, "cost:{}", mode),
            PolicyColumn::Time(mode) => write!(f, "time:{}", mode),
            PolicyColumn::Income => write!(f, "income"),
        }
    }
}

impl FromStr for PolicyColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        if trimmed == "income" {
            return Ok(PolicyColumn::Income);
        }
        match trimmed.split_once(':') {
            Some(("cost", mode)) => Ok(PolicyColumn::Cost(Mode::from_str(mode)?)),
            Some(("time", mode)) => Ok(PolicyColumn::Time(Mode::from_str(mode)?)),
            _ => Err(format!(
                "unknown policy column '{}', expected 'income', 'cost:<mode>', or 'time:<mode>'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for column in [
            PolicyColumn::Cost(Mode::Car),
            PolicyColumn::Time(Mode::Bus),
            PolicyColumn::Income,
        ] {
            let parsed =
                PolicyColumn::from_str(&column.to_string()).expect("display should parse back");
            assert_eq!(parsed, column);
        }
    }

    #[test]
    fn test_bad_column_rejected() {
        assert!(PolicyColumn::from_str("speed:bus").is_err());
        assert!(PolicyColumn::from_str("time:scooter").is_err());
    }
}
