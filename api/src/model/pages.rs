use serde::Serialize;

/// 案内ページの内容。テンプレート描画は当リポジトリの範囲外なので、
/// ページの文面をそのまま返す
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingResponse {
    pub title: &'static str,
    pub body: &'static str,
    /// ログイン中なら表示名が入る
    pub username: Option<String>,
}
