//! SplitPolicy - How rounding leftovers are handled when splitting a total

use serde::{Deserialize, Serialize};

/// Rounding policy applied by the split calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Round every share to cents on its own. Shares may not add up to the total.
    #[default]
    PerShare,
    /// Floor every share to cents, then hand out leftover cents one at a time
    /// in ascending participant id order. Shares always add up to the total.
    DistributeRemainder,
}

impl std::fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitPolicy::PerShare => write!(f, "per_share"),
            SplitPolicy::DistributeRemainder => write!(f, "distribute_remainder"),
        }
    }
}

impl std::str::FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "per_share" => Ok(SplitPolicy::PerShare),
            "distribute_remainder" => Ok(SplitPolicy::DistributeRemainder),
            _ => Err(format!("Unknown split policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for policy in [SplitPolicy::PerShare, SplitPolicy::DistributeRemainder] {
            assert_eq!(policy.to_string().parse::<SplitPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_parse_accepts_kebab_case() {
        assert_eq!(
            "Distribute-Remainder".parse::<SplitPolicy>(),
            Ok(SplitPolicy::DistributeRemainder)
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!("largest_remainder".parse::<SplitPolicy>().is_err());
    }
}
