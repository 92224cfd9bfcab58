//! release-tools
//!
//! Flutter アプリのリリース作業を補助するツール群。
//! ソースコードから翻訳キーを抽出してリファレンス辞書とロケールファイルを同期し、
//! バージョン更新やリリース告知記事の生成も行う。

pub mod config;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod release;
pub mod sync;

pub use error::{
    Error,
    Result,
};
