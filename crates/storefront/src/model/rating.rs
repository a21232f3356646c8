//! Rating model: validated star scores, customer reviews, and the admin
//! reply that may be attached to one.

use crate::model::{ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Ratings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatingId(pub String);

impl Display for RatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rating_{}", self.0)
    }
}

/// Error for scores outside the accepted star range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside the {min}..={max} star range", min = Score::MIN, max = Score::MAX)]
pub struct ScoreOutOfRange(pub u8);

/// A star score, guaranteed in range by construction.
///
/// Serialized as a bare number; deserialization rejects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(ScoreOutOfRange(raw))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Staff response attached to a rating. A new reply overwrites the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminReply {
    pub text: String,
    pub replied_at: DateTime<Utc>,
}

/// A customer review of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub product: ProductId,
    pub author: UserId,
    pub score: Score,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reply: Option<AdminReply>,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a rating. The score arrives raw and is validated
/// when the record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingCreate {
    pub product: ProductId,
    pub author: UserId,
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Query descriptor for rating listings.
#[derive(Debug, Clone)]
pub enum RatingFilter {
    /// All ratings of one product, in submission order.
    ByProduct(ProductId),
    /// All ratings written by one customer.
    ByAuthor(UserId),
    /// The natural key: one customer's rating of one product.
    ByAuthorAndProduct { author: UserId, product: ProductId },
}

/// Mean score over a set of ratings, `None` when the set is empty.
///
/// An unrated product has no average; callers must not coerce the absence
/// to zero, which would read as a terrible score.
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.score.value())).sum();
    Some(f64::from(sum) / ratings.len() as f64)
}

/// Aggregate view of one product's ratings, shown on the product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub count: usize,
    /// `None` (serialized as `null`) while the product is unrated.
    pub average: Option<f64>,
}

impl RatingSummary {
    pub fn of(ratings: &[Rating]) -> Self {
        Self {
            count: ratings.len(),
            average: average_score(ratings),
        }
    }
}
