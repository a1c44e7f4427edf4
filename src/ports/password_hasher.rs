use super::Result;

/// パスワードハッシュポート
///
/// 一方向の変換のみを提供し、復号はできない。
pub trait PasswordHasher: Send + Sync {
    /// 平文パスワードをハッシュ文字列に変換する
    fn encode(&self, plaintext: &str) -> Result<String>;
}
