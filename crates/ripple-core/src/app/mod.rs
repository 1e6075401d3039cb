//! App - アプリケーション層
//!
//! ports を組み合わせてフィードのアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **FanoutHandler**: 投稿をフォロワー全員のタイムラインへ配る
//! - **BackfillHandler**: フォロー成立時に直近の投稿を新フォロワーへ埋める
//! - **CreatePost / FollowUser / GetTimeline**: ユースケース
//! - **AppBuilder**: 構築とワイヤリング
//! - **RippleConfig**: 外部から与える設定値

pub mod backfill;
pub mod builder;
pub mod config;
pub mod create_post;
pub mod fanout;
pub mod follow_user;
pub mod get_timeline;

pub use self::backfill::BackfillHandler;
pub use self::builder::{App, AppBuilder};
pub use self::config::RippleConfig;
pub use self::create_post::CreatePost;
pub use self::fanout::FanoutHandler;
pub use self::follow_user::FollowUser;
pub use self::get_timeline::GetTimeline;
