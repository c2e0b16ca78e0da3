use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use garde::Validate;
use kernel::model::{
    id::ReservationId,
    reservation::{event::CreateReservation, pricing},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CreateReservationRequest, CreateReservationResponse, ReservationResponse,
    },
};

pub async fn register_reservation(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    // 逐次バリデーションを通過してから料金を見積もって保存する
    let event = CreateReservation::from(req);
    event
        .validate(Local::now())
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let total_cost = pricing::quote(&event.vehicle_type, event.total_minutes);
    let reservation_id = registry
        .reservation_repository()
        .create(event, total_cost)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse::new(reservation_id, total_cost)),
    ))
}

/// 支払いステップが参照する予約内容の取得
pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound("reservation not found".into())),
        })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use kernel::model::role::Role;
    use rust_decimal::Decimal;

    use super::*;
    use crate::handler::test_support::{authorized, TestRegistryBuilder};

    fn request(date: chrono::NaiveDate) -> CreateReservationRequest {
        CreateReservationRequest {
            full_name: "Juan Dela Cruz".into(),
            phone_number: "09171234567".into(),
            email: "juan@example.com".into(),
            vehicle_type: "car".into(),
            plate_number: "ABC-1234".into(),
            reservation_date: date,
            arrival_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            departure_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            parking_slot: "A-01".into(),
            total_minutes: 90,
        }
    }

    #[tokio::test]
    async fn a_valid_draft_is_persisted_with_the_quoted_cost() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .reservation
            .expect_create()
            .withf(|_, total_cost| *total_cost == Decimal::from(75))
            .returning(|_, _| Ok(ReservationId::new()));
        let registry = builder.build();

        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let res = register_reservation(
            authorized(Role::User),
            State(registry),
            Json(request(tomorrow)),
        )
        .await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn a_past_date_never_reaches_the_store() {
        // create に期待を設定しない: 呼ばれたらテストが落ちる
        let registry = TestRegistryBuilder::new().build();

        let yesterday = Local::now().date_naive() - Duration::days(1);
        let res = register_reservation(
            authorized(Role::User),
            State(registry),
            Json(request(yesterday)),
        )
        .await;
        match res {
            Err(AppError::UnprocessableEntity(msg)) => {
                assert_eq!(msg, "cannot select a past date")
            }
            _ => panic!("expected an unprocessable entity error"),
        }
    }

    #[tokio::test]
    async fn an_unknown_reservation_is_a_not_found() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .reservation
            .expect_find_by_id()
            .returning(|_| Ok(None));
        let registry = builder.build();

        let res = show_reservation(
            authorized(Role::User),
            Path(ReservationId::new()),
            State(registry),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }
}
