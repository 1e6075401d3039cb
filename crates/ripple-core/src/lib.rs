//! ripple-core
//!
//! Core building blocks for the Ripple feed service: per-user timelines are
//! materialized ahead of reads by pushing every new post into its followers'
//! feeds (fan-out on write), with a bounded backfill when a follow is formed.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, post, follow, timeline, events, errors）
//! - **ports**: 抽象化レイヤー（PostStore, FollowStore, TimelineStore, EventPublisher, Clock, IdGenerator）
//! - **impls**: インメモリ実装（stores, worker pool, event publisher）
//! - **app**: アプリケーションロジック（handlers, use cases, builder, config）
//!
//! Everything runs in-process: publication hands work to a bounded worker
//! pool and returns; handlers read the follow graph / post store and write
//! into per-user timelines. Readers only ever see materialized timelines.

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
