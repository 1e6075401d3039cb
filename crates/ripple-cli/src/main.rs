use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ripple_core::app::AppBuilder;
use ripple_core::domain::UserId;

/// Demo driver: two users, a few posts, a follow, then timeline reads.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // (A) 構築: ストア + プール + ディスパッチエンジン
    let app = AppBuilder::new().build();
    info!("app wired, dispatch engine running");

    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    // (B) Bob が投稿する（まだ誰も読まない）
    for n in 1..=3 {
        let post = app
            .create_post
            .execute(bob.clone(), format!("bob's post #{n}"))
            .await
            .expect("valid post");
        println!("created: {} ({})", post.content, post.id);
    }

    // (C) Alice が Bob をフォロー → backfill が走る
    app.follow_user
        .execute(alice.clone(), bob.clone())
        .await
        .expect("valid follow");
    println!("alice now follows bob");

    // (D) 反映は非同期なのでポーリングで待つ
    loop {
        let items = app.get_timeline.execute(&alice).await;
        if items.len() == 3 {
            println!("alice's timeline:");
            for item in items {
                println!("  [{}] {}: {}", item.created_at, item.author_id, item.content);
            }
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }

    // (E) 新しい投稿はフォロワーへ fan-out される
    app.create_post
        .execute(bob.clone(), "a fourth post, pushed live")
        .await
        .expect("valid post");

    loop {
        let items = app.get_timeline.execute(&alice).await;
        if items.len() == 4 {
            println!("newest entry: {}", items[0].content);
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }

    // Bob follows nobody, so his own feed never fills
    assert!(app.get_timeline.execute(&bob).await.is_empty());
    println!("bob's timeline is empty, as it should be");

    // (F) graceful shutdown（猶予つきドレイン）
    app.shutdown().await;
}
