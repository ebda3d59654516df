//! テスト共通フィクスチャ
//!
//! クライアントの統合テストで使うモックバックエンド。
//! `127.0.0.1` の空きポートで axum サーバーを起動し、受け取ったリクエストを記録する。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json,
    Router,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use folio_client::{ClientConfig, PortfolioClientImpl};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// トークン発行エンドポイントが返すトークン
pub const ISSUED_TOKEN: &str = "token-from-backend";

/// トークン発行時に設定する Cookie の値
pub const ISSUED_COOKIE: &str = "csrftoken=cookie-from-backend";

/// 画像エンドポイントが返すバイト列
pub const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";

/// 受け取ったお問い合わせリクエスト
#[derive(Debug, Clone)]
pub struct RecordedContact {
    pub csrf_header: Option<String>,
    pub cookie:      Option<String>,
    pub body:        Value,
}

/// モックバックエンドの設定と記録
pub struct MockBackend {
    /// トークン発行レスポンスのボディ
    pub token_body:     Value,
    /// 全エンドポイント共通で返すエラーステータス（`None` なら正常応答）
    pub failure:        Option<StatusCode>,
    /// お問い合わせ送信のステータス
    pub contact_status: StatusCode,
    pub anime:          Value,
    pub reflections:    Value,
    pub articles:       Value,

    pub token_requests: AtomicUsize,
    pub contacts:       Mutex<Vec<RecordedContact>>,
    pub image_queries:  Mutex<Vec<Option<String>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            token_body:     json!({ "csrfToken": ISSUED_TOKEN }),
            failure:        None,
            contact_status: StatusCode::OK,
            anime:          json!([]),
            reflections:    json!([]),
            articles:       json!([]),
            token_requests: AtomicUsize::new(0),
            contacts:       Mutex::new(Vec::new()),
            image_queries:  Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn token_request_count(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn recorded_contacts(&self) -> Vec<RecordedContact> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn recorded_image_queries(&self) -> Vec<Option<String>> {
        self.image_queries.lock().unwrap().clone()
    }
}

type SharedBackend = Arc<MockBackend>;

async fn issue_token(State(backend): State<SharedBackend>) -> Response {
    backend.token_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = backend.failure {
        return status.into_response();
    }
    (
        [(header::SET_COOKIE, format!("{ISSUED_COOKIE}; Path=/"))],
        Json(backend.token_body.clone()),
    )
        .into_response()
}

fn list_response(backend: &MockBackend, body: &Value) -> Response {
    match backend.failure {
        Some(status) => status.into_response(),
        None => Json(body.clone()).into_response(),
    }
}

async fn anime_list(State(backend): State<SharedBackend>) -> Response {
    list_response(&backend, &backend.anime)
}

async fn reflection_list(State(backend): State<SharedBackend>) -> Response {
    list_response(&backend, &backend.reflections)
}

async fn article_list(State(backend): State<SharedBackend>) -> Response {
    list_response(&backend, &backend.articles)
}

async fn get_image(State(backend): State<SharedBackend>, RawQuery(query): RawQuery) -> Response {
    backend.image_queries.lock().unwrap().push(query);
    if let Some(status) = backend.failure {
        return status.into_response();
    }
    ([(header::CONTENT_TYPE, "image/png")], IMAGE_BYTES).into_response()
}

async fn submit_contact_form(
    State(backend): State<SharedBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    backend.contacts.lock().unwrap().push(RecordedContact {
        csrf_header: header_value("x-csrftoken"),
        cookie: header_value("cookie"),
        body,
    });

    match backend.failure {
        Some(status) => status.into_response(),
        None => backend.contact_status.into_response(),
    }
}

/// モックバックエンドを起動し、ベース URL（`http://127.0.0.1:{port}/api/`）を返す
pub async fn spawn_backend(backend: SharedBackend) -> String {
    let app = Router::new()
        .route("/api/get_csrf_token/", get(issue_token))
        .route("/api/anime_list/", get(anime_list))
        .route("/api/reflection_list/", get(reflection_list))
        .route("/api/article_list/", get(article_list))
        .route("/api/get_image/", get(get_image))
        .route("/api/submit_contact_form/", post(submit_contact_form))
        .with_state(backend);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/")
}

/// モックバックエンドとそれに接続したクライアントを用意する
pub async fn setup(backend: MockBackend) -> (SharedBackend, PortfolioClientImpl) {
    let backend = Arc::new(backend);
    let base_url = spawn_backend(backend.clone()).await;
    let client = PortfolioClientImpl::new(&ClientConfig::new(&base_url).unwrap()).unwrap();
    (backend, client)
}
