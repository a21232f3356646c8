//! # Rating Client
//!
//! Provides a high-level API for interacting with the Rating actor: review
//! submission, the per-product listings, and the aggregation read used by
//! product pages.

use crate::model::{
    Caller, ProductId, Rating, RatingCreate, RatingFilter, RatingId, RatingSummary, UserId,
};
use crate::rating_actor::{RatingAction, RatingActionResult, RatingError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Rating actor.
#[derive(Clone)]
pub struct RatingClient {
    inner: ResourceClient<Rating>,
}

impl RatingClient {
    pub fn new(inner: ResourceClient<Rating>) -> Self {
        Self { inner }
    }

    /// Appends a new rating, always a fresh record.
    ///
    /// A caller authors ratings as themselves; only admins may submit on
    /// behalf of another account. The score itself is validated when the
    /// record is built inside the actor.
    #[instrument(skip(self, params, caller))]
    pub async fn submit(
        &self,
        params: RatingCreate,
        caller: &Caller,
    ) -> Result<RatingId, RatingError> {
        Self::authorize_author(&params, caller)?;
        debug!(product = %params.product, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Submits or replaces the caller's rating of a product.
    ///
    /// When the author already rated this product, the existing record's
    /// score and comment are replaced in place and its id, creation time,
    /// and any admin reply survive. Lookup and write share one actor
    /// message, so two concurrent upserts cannot both append.
    #[instrument(skip(self, params, caller))]
    pub async fn upsert(
        &self,
        params: RatingCreate,
        caller: &Caller,
    ) -> Result<RatingId, RatingError> {
        Self::authorize_author(&params, caller)?;
        debug!(product = %params.product, "Sending request");
        self.inner.upsert(params).await.map_err(Self::map_error)
    }

    /// All ratings of one product, in submission order, replies embedded.
    ///
    /// This read is public; product pages fetch it without a token.
    #[instrument(skip(self))]
    pub async fn list_for_product(&self, product: ProductId) -> Result<Vec<Rating>, RatingError> {
        self.list(RatingFilter::ByProduct(product)).await
    }

    /// All ratings written by `user`, readable by that user and by admins.
    #[instrument(skip(self, caller))]
    pub async fn list_for_user(
        &self,
        user: UserId,
        caller: &Caller,
    ) -> Result<Vec<Rating>, RatingError> {
        if !caller.can_access(&user) {
            return Err(RatingError::Forbidden(
                "ratings may only be listed by their author".to_string(),
            ));
        }
        self.list(RatingFilter::ByAuthor(user)).await
    }

    /// Attaches the staff reply to a rating, overwriting any earlier one.
    ///
    /// The capability check runs inside the actor, in the same message as
    /// the write. `NotFound` for a rating that does not exist.
    #[instrument(skip(self, text, caller))]
    pub async fn admin_reply(
        &self,
        id: RatingId,
        text: String,
        caller: &Caller,
    ) -> Result<Rating, RatingError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(
                id,
                RatingAction::Reply {
                    text,
                    caller: caller.clone(),
                },
            )
            .await
            .map_err(Self::map_error)?;
        let RatingActionResult::Reply(rating) = result;
        Ok(rating)
    }

    /// Mean score of a product's ratings; `None` while it has none.
    #[instrument(skip(self))]
    pub async fn average_score(&self, product: ProductId) -> Result<Option<f64>, RatingError> {
        let ratings = self.list_for_product(product).await?;
        Ok(crate::model::average_score(&ratings))
    }

    /// Count-and-average aggregate for a product page.
    #[instrument(skip(self))]
    pub async fn summary(&self, product: ProductId) -> Result<RatingSummary, RatingError> {
        let ratings = self.list_for_product(product).await?;
        Ok(RatingSummary::of(&ratings))
    }

    fn authorize_author(params: &RatingCreate, caller: &Caller) -> Result<(), RatingError> {
        if caller.can_access(&params.author) {
            Ok(())
        } else {
            Err(RatingError::Forbidden(
                "ratings are authored as the caller".to_string(),
            ))
        }
    }
}

#[async_trait]
impl ActorClient<Rating> for RatingClient {
    type Error = RatingError;

    fn inner(&self) -> &ResourceClient<Rating> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<RatingError>() {
                Ok(domain) => *domain,
                Err(foreign) => RatingError::Transient(foreign.to_string()),
            },
            FrameworkError::NotFound(id) => RatingError::NotFound(id),
            channel => RatingError::Transient(channel.to_string()),
        }
    }
}
