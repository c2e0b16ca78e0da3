use std::env;

/// 実行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// ENV 環境変数から実行環境を判定する。未設定ならビルドプロファイルに従う。
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => match v.to_lowercase().as_str() {
            "production" => Environment::Production,
            "development" => Environment::Development,
            _ => default_env,
        },
    }
}
