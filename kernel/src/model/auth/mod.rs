use uuid::Uuid;

pub mod event;

/// サーバー側に保存される不透明なセッショントークン。
/// 表示名を載せただけの Cookie と違い、クライアント側では偽造できない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}
