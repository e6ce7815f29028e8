use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a total gets apportioned between the active participants.
///
/// Serialised with the same names `FromStr` and `name` use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    Equal, // Everyone pays the same, the first active participant absorbs the rounding.

    #[serde(rename = "exact", alias = "adjustment", alias = "adjustments")]
    ExactAmount, // Everyone pays what they typed.

    Percentage, // Everyone pays their percentage of the total.

    #[serde(rename = "shares")]
    ShareWeighted, // Everyone pays their number of shares times the value of a share.
}

impl SplitStrategy {
    pub const ALL: [SplitStrategy; 4] = [
        SplitStrategy::Equal,
        SplitStrategy::ExactAmount,
        SplitStrategy::Percentage,
        SplitStrategy::ShareWeighted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SplitStrategy::Equal => "equal",
            SplitStrategy::ExactAmount => "exact",
            SplitStrategy::Percentage => "percentage",
            SplitStrategy::ShareWeighted => "shares",
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// "Adjustments" is how the expense screen labels exact amounts, so both
// spellings map to the same strategy.
impl FromStr for SplitStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" | "equally" => Ok(SplitStrategy::Equal),
            "exact" | "exact_amount" | "adjustment" | "adjustments" => {
                Ok(SplitStrategy::ExactAmount)
            }
            "percentage" | "percent" => Ok(SplitStrategy::Percentage),
            "shares" | "share" | "share_weighted" => Ok(SplitStrategy::ShareWeighted),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}
