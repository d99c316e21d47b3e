use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::error::{AppError, PRICE_OUT_OF_RANGE, VALIDATION_ERRORS};

/// 레스토랑-피자 연결 생성 요청
///
/// 본문 값은 타입이 고정되지 않은 JSON이므로 원본 값을 그대로 받아
/// [`CreateRestaurantPizzaRequest::into_new`]에서 존재 여부와 정수 변환을 검사합니다.
/// 키가 없으면 `None`, 값이 `null`이면 `Some(Value::Null)`입니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i32, example = 10)]
    pub price: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i32, example = 1)]
    pub pizza_id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i32, example = 3)]
    pub restaurant_id: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 검증과 정수 변환을 통과한 연결 생성 값
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewRestaurantPizza {
    #[validate(range(min = 1, max = 30))]
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

impl CreateRestaurantPizzaRequest {
    /// 1. 세 키가 모두 있어야 한다 (`validation errors`)
    /// 2. 각 값이 정수로 변환되어야 한다 (`price must be between 1 and 30`)
    pub fn into_new(self) -> Result<NewRestaurantPizza, AppError> {
        let (Some(price), Some(pizza_id), Some(restaurant_id)) =
            (self.price, self.pizza_id, self.restaurant_id)
        else {
            return Err(AppError::validation_error(VALIDATION_ERRORS));
        };

        match (
            coerce_integer(&price),
            coerce_integer(&pizza_id),
            coerce_integer(&restaurant_id),
        ) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(NewRestaurantPizza {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(AppError::validation_error(PRICE_OUT_OF_RANGE)),
        }
    }
}

/// JSON 값을 정수로 변환합니다.
///
/// 정수는 그대로, bool은 1/0, 실수는 0 방향으로 버림, 문자열은 앞뒤 공백을 제거한 뒤
/// 부호 있는 10진수로 파싱합니다. 문자열의 숫자 사이에는 `_` 구분자를 하나씩 둘 수 있습니다 (`"1_000"`).
/// `null`, 배열, 객체와 `i32` 범위를 벗어난 값은 변환하지 않습니다.
pub fn coerce_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i32::try_from(int).ok()
            } else if let Some(float) = number.as_f64() {
                let truncated = float.trunc();
                if truncated.is_finite()
                    && truncated >= f64::from(i32::MIN)
                    && truncated <= f64::from(i32::MAX)
                {
                    Some(truncated as i32)
                } else {
                    None
                }
            } else {
                None
            }
        }
        Value::Bool(flag) => Some(i32::from(*flag)),
        Value::String(raw) => parse_decimal(raw.trim()),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<i32> {
    let digits = raw.strip_prefix(|c| c == '+' || c == '-').unwrap_or(raw);
    let separators_ok = !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__");
    if digits.is_empty() || !separators_ok {
        return None;
    }

    raw.replace('_', "").parse::<i32>().ok()
}
