//! Demo binary: load the catalog, show it, run one mutation round.
//!
//! Mirrors the reference client's flow in log form: load once on start,
//! render whatever state the controller exposes, then exercise
//! create/patch/remove with a refresh after each successful write.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CATALOG_API_URL=http://localhost:3000 RUST_LOG=debug cargo run
//! ```

use std::time::Duration;

use catalog_sync::config::CatalogConfig;
use catalog_sync::controller::{CatalogHandle, CatalogState, CatalogStatus};
use catalog_sync::lifecycle::{setup_tracing, CatalogSystem};
use catalog_sync::model::{ProductDraft, ProductPatch};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env();
    info!(base_url = %config.base_url, "Starting catalog viewer");

    let system = CatalogSystem::new(&config);

    info!("Chargement...");
    let state = settled_state(&system.handle).await?;

    match state.status() {
        CatalogStatus::Failed => {
            error!("Erreur : {}", state.error().unwrap_or("unknown"));
            return system.shutdown().await;
        }
        _ => info!(count = state.products().len(), "Nos Produits"),
    }

    for product in state.products().iter().take(5) {
        info!(id = %product.id, title = %product.title, price = product.price, "Produit");
    }

    // One mutation round: create, patch the price, remove again. Outcomes
    // arrive through the tracing sink; the replica refreshes after each
    // successful write.
    let draft = ProductDraft {
        title: "Produit Test".to_string(),
        price: 19.99,
        description: "Description du produit test".to_string(),
        image: "https://i.pravatar.cc".to_string(),
        category: "test".to_string(),
    };
    system
        .handle
        .create(draft)
        .await
        .map_err(|e| e.to_string())?;

    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = system.handle.snapshot().await.map_err(|e| e.to_string())?;
    info!(count = state.products().len(), "Catalogue après création");

    if let Some(created) = state.products().last() {
        let id = created.id;
        let patch = ProductPatch {
            price: Some(5.0),
            ..Default::default()
        };
        system
            .handle
            .patch(id, patch)
            .await
            .map_err(|e| e.to_string())?;
        system.handle.remove(id).await.map_err(|e| e.to_string())?;
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let state = system.handle.snapshot().await.map_err(|e| e.to_string())?;
    info!(count = state.products().len(), "Catalogue final");

    system.shutdown().await
}

/// Poll snapshots until the initial load has succeeded or failed.
async fn settled_state(handle: &CatalogHandle) -> Result<CatalogState, String> {
    loop {
        let state = handle.snapshot().await.map_err(|e| e.to_string())?;
        if state.is_settled() {
            return Ok(state);
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
