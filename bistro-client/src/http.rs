// bistro-client/src/http.rs
// HTTP 客户端 - 网络通信

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::{
    CatalogApi, Category, CategoryCreate, ClientConfig, ClientError, ClientResult, Dish,
    DishCreate, ImageUpload,
};

/// 服务端返回的错误响应格式
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(alias = "error")]
    message: String,
}

/// Network HTTP client for the catalog API
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    ///
    /// Every request carries the configured timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let body = Self::check_status(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a POST request with JSON body
    ///
    /// Returns the raw response body.
    pub async fn post_json<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(%url, "POST json");
        let response = self.client.post(&url).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Make a POST request with a multipart body
    ///
    /// Returns the raw response body.
    pub async fn post_multipart(&self, path: &str, form: Form) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::check_status(response).await
    }

    /// 检查状态码，非 2xx 转换为 Rejected
    async fn check_status(response: reqwest::Response) -> ClientResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // 尝试解析为 API 错误响应
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Decode an optional echo of the created resource
    fn decode_created<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        match serde_json::from_slice(body) {
            Ok(created) => Some(created),
            Err(e) => {
                tracing::debug!(error = %e, "Creation response is not a resource echo");
                None
            }
        }
    }

    fn image_part(image: &ImageUpload) -> ClientResult<Part> {
        let content_type = if image.content_type.is_empty() {
            mime_guess::from_path(&image.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        } else {
            image.content_type.clone()
        };
        Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&content_type)
            .map_err(|e| ClientError::Config(format!("Failed to create multipart: {}", e)))
    }

    /// Build the multipart body for a dish creation
    pub fn dish_form(dish: &DishCreate) -> ClientResult<Form> {
        let mut form = Form::new();
        for (name, value) in dish.text_fields() {
            form = form.text(name, value);
        }
        if let Some(image) = &dish.image {
            form = form.part("image", Self::image_part(image)?);
        }
        Ok(form)
    }
}

#[async_trait]
impl CatalogApi for NetworkHttpClient {
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        self.get("foods").await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("categories").await
    }

    async fn create_dish(&self, dish: &DishCreate) -> ClientResult<Option<Dish>> {
        let form = Self::dish_form(dish)?;
        let body = self.post_multipart("foods", form).await?;
        Ok(Self::decode_created(&body))
    }

    async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Option<Category>> {
        let body = self.post_json("categories", category).await?;
        Ok(Self::decode_created(&body))
    }
}
