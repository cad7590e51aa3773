//! postgen 共通ライブラリ
//!
//! アプリ側クレートと共有するエラー型・メッセージ型・LLMドライバー・ログ基盤を提供します。

/// エラーハンドリング
pub mod error;

/// 会話メッセージ型
pub mod msg;

/// 共有ドメイン型（ProviderName / ModelName）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート（ログ・時刻）
pub mod ports;

/// 標準アダプタ
pub mod adapter;
