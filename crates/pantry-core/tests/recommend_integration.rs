//! End-to-end recommendation against a mocked photo provider.
//!
//! A second synthesizer with the same seed predicts the recipe names, so each
//! query can be answered with its own photo and checked after the merge.

use mockito::{Matcher, Server};
use pantry_core::config::ImagesConfig;
use pantry_core::{
    PexelsClient, RecipeStore, RecipeSynthesizer, Recommender, BATCH_SIZE, PLACEHOLDER_IMAGE_URL,
};

const SEED: u64 = 314;

fn photo_url_for(name: &str) -> String {
    format!("https://images.example/{}.jpg", name.replace(' ', "-"))
}

fn images_for(server: &Server) -> PexelsClient {
    let config = ImagesConfig {
        endpoint: format!("{}/v1/search", server.url()),
        api_key: "test-key".to_string(),
        ..ImagesConfig::default()
    };
    PexelsClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_each_recipe_gets_the_photo_for_its_own_name() {
    let ingredients = ["chicken", "rice"];

    let mut predictor = RecipeSynthesizer::with_seed(SEED);
    let names: Vec<String> = (0..BATCH_SIZE)
        .map(|_| predictor.synthesize(&ingredients).unwrap().name)
        .collect();

    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for name in &names {
        let body = serde_json::json!({
            "photos": [{ "src": { "large": photo_url_for(name) } }]
        });
        let mock = server
            .mock("GET", "/v1/search")
            .match_query(Matcher::UrlEncoded(
                "query".into(),
                format!("{name} food dish"),
            ))
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;
        mocks.push(mock);
    }

    let mut recommender =
        Recommender::with_synthesizer(RecipeSynthesizer::with_seed(SEED), images_for(&server));
    let batch = recommender.recommend(&ingredients).await.unwrap();

    assert_eq!(batch.len(), BATCH_SIZE);
    for (recipe, predicted) in batch.iter().zip(&names) {
        assert_eq!(&recipe.name, predicted);
        assert_eq!(recipe.image, photo_url_for(&recipe.name));
    }
}

#[tokio::test]
async fn test_unreachable_provider_still_fills_every_image() {
    let config = ImagesConfig {
        endpoint: "http://127.0.0.1:1/v1/search".to_string(),
        timeout_secs: 2,
        ..ImagesConfig::default()
    };
    let images = PexelsClient::new(&config).unwrap();
    let mut recommender = Recommender::new(images);

    let batch = recommender.recommend(&["chicken", "rice"]).await.unwrap();

    assert_eq!(batch.len(), 3);
    for recipe in &batch {
        assert!(!recipe.image.is_empty());
        assert_eq!(recipe.image, PLACEHOLDER_IMAGE_URL);
    }
}

#[tokio::test]
async fn test_store_over_http_provider() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"photos": []}"#)
        .create_async()
        .await;

    let mut store = RecipeStore::new(Recommender::new(images_for(&server)));
    store.fetch_recipes(&["mushroom"]).await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.recipes.len(), BATCH_SIZE);
    assert!(state.recipes.iter().all(|r| r.image == PLACEHOLDER_IMAGE_URL));
    assert_eq!(state.last_search_ingredients, vec!["mushroom"]);
}
