use derive_new::new;
use kernel::model::reservation::ReservationSummary;
use serde::Serialize;

use crate::model::{form_field::FormFieldResponse, reservation::ReservationResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummaryResponse {
    pub total: i64,
    pub pending: i64,
    pub paid: i64,
}

impl From<ReservationSummary> for ReservationSummaryResponse {
    fn from(value: ReservationSummary) -> Self {
        let ReservationSummary {
            total,
            pending,
            paid,
        } = value;
        Self {
            total,
            pending,
            paid,
        }
    }
}

/// 管理ダッシュボード。件数集計・全予約・カスタムフォーム項目をまとめて返す
#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: ReservationSummaryResponse,
    pub reservations: Vec<ReservationResponse>,
    pub custom_fields: Vec<FormFieldResponse>,
}
