use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 요청 id. 핸들러에서 `Extension<RequestId>`로 꺼낼 수 있습니다.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청마다 id를 부여하고 span 안에서 처리한 뒤 완료 로그를 남깁니다.
///
/// 클라이언트가 `x-request-id`를 보내면 그대로 사용하고, 응답 헤더에 되돌려줍니다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        info!(duration_ms, status, "request completed");

        let header_value = HeaderValue::from_str(&request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), header_value);
        response
    }
    .instrument(span)
    .await
}
