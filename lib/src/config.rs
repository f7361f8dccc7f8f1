use std::str::FromStr;

use color_eyre::eyre::bail;

/// How the boundary filter treats a head that touches the edge of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Check both axes, so a head in a corner loses both outward moves.
    #[default]
    Independent,
    /// Stop at the first edge the head touches, checked in the order
    /// left, right, bottom, top. In a corner only one outward move is removed.
    FirstMatch,
}

impl FromStr for BoundaryPolicy {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> color_eyre::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "first-match" | "first_match" => Ok(Self::FirstMatch),
            other => bail!("unknown boundary policy {other:?}, expected independent or first-match"),
        }
    }
}

/// How the food target for the tie-break is picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FoodTargeting {
    /// Nearest food by Manhattan distance, earliest on the board wins ties.
    #[default]
    Nearest,
    /// Scan whose running minimum starts at zero. No food is ever closer than
    /// that, so no target is found and the safe move is picked at random.
    Legacy,
}

impl FromStr for FoodTargeting {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> color_eyre::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "legacy" => Ok(Self::Legacy),
            other => bail!("unknown food targeting {other:?}, expected nearest or legacy"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    pub boundary: BoundaryPolicy,
    pub food: FoodTargeting,
}

impl SelectorConfig {
    /// Reproduces the first-match edge checks and the inert food scan.
    pub fn legacy() -> Self {
        Self {
            boundary: BoundaryPolicy::FirstMatch,
            food: FoodTargeting::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policies() {
        assert_eq!(
            "first-match".parse::<BoundaryPolicy>().unwrap(),
            BoundaryPolicy::FirstMatch
        );
        assert_eq!(
            " Independent ".parse::<BoundaryPolicy>().unwrap(),
            BoundaryPolicy::Independent
        );
        assert_eq!("legacy".parse::<FoodTargeting>().unwrap(), FoodTargeting::Legacy);
        assert_eq!("NEAREST".parse::<FoodTargeting>().unwrap(), FoodTargeting::Nearest);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("corners".parse::<BoundaryPolicy>().is_err());
        assert!("closest".parse::<FoodTargeting>().is_err());
    }

    #[test]
    fn defaults_are_corrected_behaviour() {
        let config = SelectorConfig::default();
        assert_eq!(config.boundary, BoundaryPolicy::Independent);
        assert_eq!(config.food, FoodTargeting::Nearest);
    }
}
