//! Entity trait implementation for the Rating domain type.
//!
//! Score validation happens in `from_create_params`, so an out-of-range
//! submission never reaches the store. The upsert key is the (author,
//! product) pair: resubmitting through the upsert path replaces the score
//! and comment of the existing review instead of appending a duplicate.

use crate::model::{AdminReply, Rating, RatingCreate, RatingFilter, RatingId, Score};
use crate::rating_actor::{RatingAction, RatingActionResult, RatingError};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Rating {
    type Id = RatingId;
    type Create = RatingCreate;
    type Update = ();
    type Action = RatingAction;
    type ActionResult = RatingActionResult;
    type Filter = RatingFilter;
    type Context = ();
    type Error = RatingError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        let score = Score::try_from(params.score)
            .map_err(|e| RatingError::Validation(e.to_string()))?;
        Ok(Self {
            id,
            product: params.product,
            author: params.author,
            score,
            comment: params.comment,
            reply: None,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, filter: &RatingFilter) -> bool {
        match filter {
            RatingFilter::ByProduct(product) => self.product == *product,
            RatingFilter::ByAuthor(author) => self.author == *author,
            RatingFilter::ByAuthorAndProduct { author, product } => {
                self.author == *author && self.product == *product
            }
        }
    }

    /// One review per (author, product) when going through the upsert path.
    fn upsert_filter(params: &RatingCreate) -> Option<RatingFilter> {
        Some(RatingFilter::ByAuthorAndProduct {
            author: params.author.clone(),
            product: params.product.clone(),
        })
    }

    // Ratings carry no general update payload; replies go through the action.
    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Resubmission replaces the opinion but keeps the record: id, creation
    /// time, and any staff reply survive.
    async fn on_upsert(
        &mut self,
        params: RatingCreate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.score = Score::try_from(params.score)
            .map_err(|e| RatingError::Validation(e.to_string()))?;
        self.comment = params.comment;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RatingAction,
        _ctx: &Self::Context,
    ) -> Result<RatingActionResult, Self::Error> {
        match action {
            RatingAction::Reply { text, caller } => {
                if !caller.admin {
                    return Err(RatingError::Forbidden(
                        "replying to ratings requires the admin capability".to_string(),
                    ));
                }
                self.reply = Some(AdminReply {
                    text,
                    replied_at: Utc::now(),
                });
                Ok(RatingActionResult::Reply(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Caller;
    use resource_actor::ActorEntity;

    fn create_params(author: &str, score: u8) -> RatingCreate {
        RatingCreate {
            product: "p-1".to_string(),
            author: author.to_string(),
            score,
            comment: Some("tasty".to_string()),
        }
    }

    #[test]
    fn create_validates_the_score() {
        let ok = Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 4));
        assert_eq!(ok.unwrap().score.value(), 4);

        let err =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 6))
                .unwrap_err();
        assert!(matches!(err, RatingError::Validation(_)));
    }

    #[test]
    fn upsert_key_is_author_and_product() {
        let filter = Rating::upsert_filter(&create_params("alice", 4)).unwrap();
        let mine =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 4))
                .unwrap();
        let theirs =
            Rating::from_create_params(RatingId("r-2".to_string()), create_params("bob", 4))
                .unwrap();
        assert!(mine.matches(&filter));
        assert!(!theirs.matches(&filter));
    }

    #[tokio::test]
    async fn upsert_replaces_opinion_but_keeps_the_record() {
        let mut rating =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 5))
                .unwrap();
        rating.reply = Some(AdminReply {
            text: "thanks!".to_string(),
            replied_at: Utc::now(),
        });
        let created_at = rating.created_at;

        rating
            .on_upsert(
                RatingCreate {
                    product: "p-1".to_string(),
                    author: "alice".to_string(),
                    score: 2,
                    comment: Some("went downhill".to_string()),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(rating.score.value(), 2);
        assert_eq!(rating.comment.as_deref(), Some("went downhill"));
        assert_eq!(rating.created_at, created_at);
        assert!(rating.reply.is_some());
    }

    #[tokio::test]
    async fn upsert_still_validates_the_score() {
        let mut rating =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 5))
                .unwrap();
        let err = rating
            .on_upsert(create_params("alice", 0), &())
            .await
            .unwrap_err();
        assert!(matches!(err, RatingError::Validation(_)));
        assert_eq!(rating.score.value(), 5);
    }

    #[tokio::test]
    async fn reply_requires_admin() {
        let mut rating =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 5))
                .unwrap();
        let err = rating
            .handle_action(
                RatingAction::Reply {
                    text: "nope".to_string(),
                    caller: Caller::customer("alice"),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RatingError::Forbidden(_)));
        assert!(rating.reply.is_none());
    }

    #[tokio::test]
    async fn second_reply_overwrites_the_first() {
        let mut rating =
            Rating::from_create_params(RatingId("r-1".to_string()), create_params("alice", 5))
                .unwrap();
        let staff = Caller::admin("staff");

        rating
            .handle_action(
                RatingAction::Reply {
                    text: "first".to_string(),
                    caller: staff.clone(),
                },
                &(),
            )
            .await
            .unwrap();
        let first_at = rating.reply.as_ref().unwrap().replied_at;

        rating
            .handle_action(
                RatingAction::Reply {
                    text: "second".to_string(),
                    caller: staff,
                },
                &(),
            )
            .await
            .unwrap();

        let reply = rating.reply.as_ref().unwrap();
        assert_eq!(reply.text, "second");
        assert!(reply.replied_at >= first_at);
    }
}
