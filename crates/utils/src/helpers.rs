//! Helper functions - tiền tệ, chiết khấu, thuế và vài tiện ích chung

use rust_decimal::{Decimal, RoundingStrategy};
use std::iter::Sum;

/// Số chữ số thập phân khi hiển thị tiền
pub const CURRENCY_DP: u32 = 2;

/// Ký hiệu tiền tệ mặc định
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Làm tròn về 2 chữ số thập phân (half away from zero), scale luôn là 2.
///
/// ```
/// use rust_decimal::Decimal;
/// use shopkit_utils::round_currency;
///
/// let rounded = round_currency(Decimal::new(26991, 3)); // 26.991
/// assert_eq!(rounded.to_string(), "26.99");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Format số tiền với ký hiệu `$`, ví dụ `$1234.50`
pub fn format_currency(amount: Decimal) -> String {
    format_currency_with(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Format số tiền với ký hiệu tùy chọn. Số âm đặt dấu trừ trước ký hiệu: `-$5.00`
pub fn format_currency_with(amount: Decimal, symbol: &str) -> String {
    let rounded = round_currency(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", symbol, rounded.abs())
    } else {
        format!("{}{}", symbol, rounded.abs())
    }
}

/// Giá sau chiết khấu: `price * (1 - percent / 100)`, làm tròn 2 chữ số.
///
/// `percent` ngoài khoảng [0, 100] không bị clamp. Trả về `None` khi kết quả
/// vượt quá phạm vi `Decimal` (chỉ xảy ra với percent âm hoặc rất lớn).
pub fn calculate_discount(price: Decimal, percent: Decimal) -> Option<Decimal> {
    let factor = Decimal::ONE.checked_sub(percent.checked_div(Decimal::ONE_HUNDRED)?)?;
    price.checked_mul(factor).map(round_currency)
}

/// Tiền thuế cho `amount` với `rate` dạng phân số (0.08 = 8%), `None` khi tràn
pub fn calculate_tax(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate).map(round_currency)
}

/// Tổng các phần tử của slice
pub fn array_sum<T>(values: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    values.iter().copied().sum()
}

/// Bản sao độc lập của một giá trị
pub fn deep_clone<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Truncate string với suffix (tính theo ký tự, không cắt giữa UTF-8)
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(suffix.chars().count());
        let head: String = s.chars().take(keep).collect();
        format!("{}{}", head, suffix)
    }
}
