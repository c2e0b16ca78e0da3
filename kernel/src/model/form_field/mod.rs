use strum::{AsRefStr, Display, EnumString};

use crate::model::id::FormFieldId;

pub mod event;

/// 管理者が予約フォームに追加できるカスタム項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field_id: FormFieldId,
    pub label: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FieldType {
    Text,
    Number,
    Date,
    Time,
    Select,
    Checkbox,
}
