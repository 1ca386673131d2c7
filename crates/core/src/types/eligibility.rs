//! Reward eligibility derived from a points balance.

use serde::{Deserialize, Serialize};

/// What a points balance is worth to the customer right now.
///
/// Balances of [`Eligibility::REDEMPTION_THRESHOLD`] or more earn a flat
/// discount per full threshold; smaller balances report the distance to the
/// next threshold.
///
/// ```
/// use emporium_core::Eligibility;
///
/// assert_eq!(Eligibility::from_points(250), Eligibility::Reward { dollars: 20 });
/// assert_eq!(Eligibility::from_points(99), Eligibility::PointsAway { points: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// Eligible for a discount on the next order.
    Reward {
        /// Discount value in whole currency units.
        dollars: i64,
    },
    /// Not yet eligible; this many points short of the next threshold.
    PointsAway {
        /// Points remaining until redemption.
        points: i64,
    },
}

impl Eligibility {
    /// Points required for the first reward tier.
    pub const REDEMPTION_THRESHOLD: i64 = 100;
    /// Discount earned per full threshold of points.
    pub const DOLLARS_PER_TIER: i64 = 10;

    /// Derive eligibility from a points balance.
    #[must_use]
    pub const fn from_points(points: i64) -> Self {
        if points >= Self::REDEMPTION_THRESHOLD {
            Self::Reward {
                dollars: points / Self::REDEMPTION_THRESHOLD * Self::DOLLARS_PER_TIER,
            }
        } else {
            Self::PointsAway {
                points: Self::REDEMPTION_THRESHOLD - points,
            }
        }
    }
}

impl core::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reward { dollars } => write!(f, "${dollars} off"),
            Self::PointsAway { points } => {
                let plural = if *points == 1 { "" } else { "s" };
                write!(f, "{points} point{plural} away")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(
            Eligibility::from_points(100),
            Eligibility::Reward { dollars: 10 }
        );
        assert_eq!(
            Eligibility::from_points(99),
            Eligibility::PointsAway { points: 1 }
        );
    }

    #[test]
    fn test_reward_scales_per_full_tier() {
        assert_eq!(
            Eligibility::from_points(250),
            Eligibility::Reward { dollars: 20 }
        );
        assert_eq!(
            Eligibility::from_points(1000),
            Eligibility::Reward { dollars: 100 }
        );
    }

    #[test]
    fn test_zero_balance() {
        assert_eq!(
            Eligibility::from_points(0),
            Eligibility::PointsAway { points: 100 }
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Eligibility::from_points(100).to_string(), "$10 off");
        assert_eq!(Eligibility::from_points(250).to_string(), "$20 off");
        assert_eq!(Eligibility::from_points(99).to_string(), "1 point away");
        assert_eq!(Eligibility::from_points(0).to_string(), "100 points away");
    }
}
