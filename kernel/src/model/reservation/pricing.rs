use rust_decimal::Decimal;

/// 時間単価の高い車種。大文字小文字は区別しない。
const PREMIUM_VEHICLES: [&str; 4] = ["car", "sedan", "suv", "hatchback"];

const PREMIUM_RATE: u32 = 50;
const STANDARD_RATE: u32 = 30;

/// 車種と駐車時間（分）から料金を見積もる。
/// 駐車時間は 15 分単位に切り上げてから時間単価を掛ける。
/// 0 分以下は 0 として扱い、負の料金は発生させない。
pub fn quote(vehicle_type: &str, total_minutes: i32) -> Decimal {
    let rate = hourly_rate(vehicle_type);
    let quarters = billed_quarters(total_minutes);
    Decimal::from(quarters) * Decimal::from(rate) / Decimal::from(4)
}

fn hourly_rate(vehicle_type: &str) -> u32 {
    let vehicle = vehicle_type.trim().to_lowercase();
    if PREMIUM_VEHICLES.contains(&vehicle.as_str()) {
        PREMIUM_RATE
    } else {
        STANDARD_RATE
    }
}

/// ceil(minutes / 15) を整数演算で求める
fn billed_quarters(total_minutes: i32) -> i64 {
    if total_minutes <= 0 {
        return 0;
    }
    (i64::from(total_minutes) + 14) / 15
}
