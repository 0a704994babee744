use repustate_sdk::{calls::SearchOptions, client::Client};
use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let repustate_key = env::var("REPUSTATE_KEY").expect("REPUSTATE_KEY not set");

    let client = Client::new(&repustate_key).unwrap();

    let score = client
        .score_text("this is a happy piece of text")
        .await
        .unwrap();
    println!("score: {score}");

    let scores = client
        .bulk_score([
            ("morning", "What a lovely morning."),
            ("commute", "The train was late again, awful."),
        ])
        .await
        .unwrap();
    println!("bulk scores: {scores:?}");

    let search = client
        .search_sentiment("rust", SearchOptions::default())
        .await
        .unwrap();
    println!("search results: {}", search["number_of_results"]);
}
