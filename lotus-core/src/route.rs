//! 路由描述（Route）
//!
//! 描述一个可导航目标的值对象，至少包含 `path`，可附带查询参数、标题与元数据。
//! 由外部路由配置提供，构造后不可变。
//! 选中判断只比较 `path`，查询参数不参与。
//!
use crate::error::{CoreError, CoreResult};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 导航目标
///
/// # 示例
///
/// ```
/// use lotus_core::route::Route;
///
/// let route = Route::builder().path("/about").title("About").build();
/// assert_eq!(route.path(), "/about");
/// assert_eq!(route.title(), Some("About"));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[builder(into)]
    path: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    query: BTreeMap<String, String>,
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

impl Route {
    /// 仅以路径创建路由，不做校验（路由配置可能尚未完整）
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
            title: None,
            metadata: BTreeMap::new(),
        }
    }

    /// 以校验的方式创建路由：路径非空、以 `/` 开头、不携带片段；
    /// `?` 之后的部分按 `k=v&k2=v2` 解析为查询参数（无 `=` 的键取空值）
    pub fn parse(location: &str) -> CoreResult<Self> {
        if location.is_empty() {
            return Err(CoreError::invalid_route("path is empty"));
        }
        if !location.starts_with('/') {
            return Err(CoreError::invalid_route(format!(
                "path must start with '/': {location}"
            )));
        }
        if location.contains('#') {
            return Err(CoreError::invalid_route(format!(
                "path must not contain a fragment: {location}"
            )));
        }

        let (path, query) = match location.split_once('?') {
            Some((path, raw)) => (path, Self::parse_query(raw)?),
            None => (location, BTreeMap::new()),
        };

        Ok(Self {
            query,
            ..Self::new(path)
        })
    }

    fn parse_query(raw: &str) -> CoreResult<BTreeMap<String, String>> {
        let mut query = BTreeMap::new();
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                return Err(CoreError::invalid_route(format!(
                    "query parameter without a key: {raw}"
                )));
            }
            query.insert(key.to_string(), value.to_string());
        }
        Ok(query)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// `path` 加上查询串（若有）
    pub fn location(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{}?{}", self.path, query.join("&"))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
