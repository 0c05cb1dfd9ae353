use std::sync::Arc;

mod support;

use byline_core::ApplicationServices;
use byline_core::application::commands::articles::CreateArticleCommand;
use byline_core::application::error::ApplicationError;
use byline_core::application::queries::articles::GetArticleByIdQuery;
use byline_core::domain::user::UserId;

use support::{DummyArticleRead, DummyArticleWrite, DummyClock, DummySlug, InMemoryTagRepo};

#[tokio::test]
async fn aggregate_wires_every_service() {
    let services = ApplicationServices::new(
        Arc::new(DummyArticleWrite),
        Arc::new(DummyArticleRead),
        Arc::new(InMemoryTagRepo::with_labels(&["rust"])),
        Arc::new(DummyClock),
        Arc::new(DummySlug),
    );

    let tags = services
        .tag_queries
        .list_tags()
        .await
        .expect("list_tags failed");
    assert_eq!(tags.len(), 1);

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: 1 })
        .await
        .expect_err("dummy read repo has no records");
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let command = CreateArticleCommand::builder()
        .title("My Post")
        .description("desc")
        .body("body")
        .build()
        .expect("command should build");
    let err = services
        .article_commands
        .create_article(UserId::new(1).unwrap(), command)
        .await
        .expect_err("dummy write repo rejects inserts");
    assert!(matches!(err, ApplicationError::Domain(_)));

    assert_eq!(
        services
            .tag_maintenance
            .prune_orphans()
            .await
            .expect("prune failed"),
        0
    );
}
