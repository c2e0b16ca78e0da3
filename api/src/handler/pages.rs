use axum::Json;

use crate::{
    extractor::AuthorizedUser,
    model::pages::{LandingResponse, PageResponse},
};

pub async fn landing(user: Option<AuthorizedUser>) -> Json<LandingResponse> {
    Json(LandingResponse {
        title: "GoPark",
        body: "Reserve a parking slot in seconds. Sign up, pick a date and a slot, \
               pay with your e-wallet, and get your receipt.",
        username: user.map(|u| u.user.username),
    })
}

pub async fn about() -> Json<PageResponse> {
    Json(PageResponse {
        title: "About GoPark",
        body: "GoPark is an online parking reservation service for covered and \
               open-air slots, serving daily commuters and event visitors.",
    })
}

pub async fn services() -> Json<PageResponse> {
    Json(PageResponse {
        title: "Services",
        body: "Hourly parking reservation billed per started quarter hour, \
               e-wallet payment, and printable receipts.",
    })
}

pub async fn contact() -> Json<PageResponse> {
    Json(PageResponse {
        title: "Contact",
        body: "Reach the GoPark team at support@gopark.example or visit the \
               information booth at the main gate.",
    })
}
