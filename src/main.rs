use library_catalog::config::LibraryConfig;
use library_catalog::lifecycle::{setup_tracing, LibrarySystem};
use library_catalog::library::SearchQuery;
use library_catalog::model::{ItemCreate, LibraryItem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = LibraryConfig::from_env();
    info!(?config, "Starting library system");

    let system = LibrarySystem::with_config(config);
    let client = system.client.clone();

    let span = tracing::info_span!("catalog_setup");
    let (book_id, member_id) = async {
        let book_id = client
            .add_item(LibraryItem::book(
                "The Pragmatic Programmer",
                "1999",
                "Andrew Hunt and David Thomas",
                "978-0201616224",
            ))
            .await?;
        client
            .add_item(LibraryItem::magazine(
                "National Geographic",
                "2023",
                "Susan Goldberg",
                "May 2023 Issue",
            ))
            .await?;
        client
            .create_item(ItemCreate {
                kind: "dvd".to_string(),
                title: "Inception".to_string(),
                author_name: "Christopher Nolan".to_string(),
                pub_year: "2010".to_string(),
                detail: "2h:28m".to_string(),
            })
            .await?;
        let member_id = client.create_member("Patrick").await?;
        Ok::<_, library_catalog::service::ServiceError>((book_id, member_id))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("lending");
    let lending = async {
        client.lend_item(member_id, book_id).await?;
        let borrowed = client.get_borrowed_items(member_id).await?;
        info!(count = borrowed.len(), "Member holds items");

        if let Err(e) = client.lend_item(member_id, book_id).await {
            info!(error = %e, "Second lend rejected as expected");
        }

        let found = client
            .search_item(SearchQuery::by_author("Christopher Nolan"))
            .await?;
        for hit in &found {
            let snapshot = serde_json::to_string(hit).unwrap_or_default();
            info!(%snapshot, "Search hit");
        }

        let overdue = client.get_overdue_items().await?;
        info!(count = overdue.len(), "Overdue items");

        client.return_item(member_id, book_id).await?;
        Ok::<_, library_catalog::service::ServiceError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = lending {
        error!(error = %e, "Lending workflow failed");
    }

    drop(client);
    let library = system.shutdown().await.map_err(|e| e.to_string())?;
    info!(
        items = library.item_count(),
        members = library.member_count(),
        "Application completed successfully"
    );
    Ok(())
}
