use resource_actor::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Draft {
    id: u32,
    title: String,
    body: String,
    published: bool,
}

#[derive(Debug)]
struct DraftCreate {
    title: String,
    body: String,
}

#[derive(Debug)]
struct DraftUpdate {
    body: Option<String>,
}

#[derive(Debug)]
enum DraftAction {
    Publish,
}

#[derive(Debug)]
enum DraftFilter {
    All,
    ByTitle(String),
    Published,
}

#[derive(Debug, thiserror::Error)]
#[error("Draft error")]
struct DraftError;

#[async_trait]
impl ActorEntity for Draft {
    type Id = u32;
    type Create = DraftCreate;
    type Update = DraftUpdate;
    type Action = DraftAction;
    type ActionResult = bool;
    type Filter = DraftFilter;
    type Context = ();
    type Error = DraftError;

    fn from_create_params(id: u32, params: DraftCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            body: params.body,
            published: false,
        })
    }

    fn matches(&self, filter: &DraftFilter) -> bool {
        match filter {
            DraftFilter::All => true,
            DraftFilter::ByTitle(title) => self.title == *title,
            DraftFilter::Published => self.published,
        }
    }

    fn upsert_filter(params: &DraftCreate) -> Option<DraftFilter> {
        Some(DraftFilter::ByTitle(params.title.clone()))
    }

    async fn on_update(
        &mut self,
        update: DraftUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(body) = update.body {
            self.body = body;
        }
        Ok(())
    }

    async fn on_upsert(
        &mut self,
        params: DraftCreate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.body = params.body;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DraftAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            DraftAction::Publish => {
                if self.published {
                    Ok(false)
                } else {
                    self.published = true;
                    Ok(true)
                }
            }
        }
    }
}

fn spawn_draft_actor() -> ResourceClient<Draft> {
    let mut next = 0u32;
    let (actor, client) = ResourceActor::new(10, move || {
        next += 1;
        next
    });
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn_draft_actor();

    // 1. Create
    let payload = DraftCreate {
        title: "intro".into(),
        body: "v1".into(),
    };
    let id: u32 = client.create(payload).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Perform Action: Publish
    let changed: bool = client.perform_action(id, DraftAction::Publish).await.unwrap();
    assert!(changed);

    // Verify state
    let draft: Draft = client.get(id).await.unwrap().unwrap();
    assert!(draft.published);

    // 3. Perform Action: Publish again (should return false)
    let changed_again: bool = client.perform_action(id, DraftAction::Publish).await.unwrap();
    assert!(!changed_again);

    // 4. Update
    let update = DraftUpdate {
        body: Some("v2".into()),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.body, "v2");
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let client = spawn_draft_actor();

    for title in ["a", "b", "c"] {
        client
            .create(DraftCreate {
                title: title.into(),
                body: String::new(),
            })
            .await
            .unwrap();
    }
    client.perform_action(2, DraftAction::Publish).await.unwrap();

    let all = client.list(DraftFilter::All).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);

    let published = client.list(DraftFilter::Published).await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "b");
}

#[tokio::test]
async fn test_upsert_merges_on_natural_key() {
    let client = spawn_draft_actor();

    let first = client
        .upsert(DraftCreate {
            title: "intro".into(),
            body: "v1".into(),
        })
        .await
        .unwrap();
    client.perform_action(first, DraftAction::Publish).await.unwrap();

    // Same key: merged into the existing record, not duplicated
    let second = client
        .upsert(DraftCreate {
            title: "intro".into(),
            body: "v2".into(),
        })
        .await
        .unwrap();
    assert_eq!(first, second);

    let all = client.list(DraftFilter::All).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].body, "v2");
    // Fields outside the merge keep their stored value
    assert!(all[0].published);

    // Different key: a second record
    let third = client
        .upsert(DraftCreate {
            title: "outro".into(),
            body: "v1".into(),
        })
        .await
        .unwrap();
    assert_ne!(first, third);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let client = spawn_draft_actor();

    let err = client
        .update(99, DraftUpdate { body: None })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));

    let err = client
        .perform_action(99, DraftAction::Publish)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));

    assert!(client.get(99).await.unwrap().is_none());
}
