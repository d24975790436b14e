//! Postman Collection v2.1 document types.
//!
//! Field order in these structs is the key order of the written file, so it
//! follows the layout Postman itself uses on export. Empty optional parts are
//! skipped on write and defaulted on read, which keeps parse → write
//! byte-stable.

use serde::{Deserialize, Serialize};

/// Schema URL for Postman Collection v2.1.0.
pub const COLLECTION_SCHEMA_V21: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root structure for Postman Collection v2.1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanCollection {
    /// Collection metadata.
    pub info: PostmanInfo,
    /// Collection-wide default auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<PostmanAuth>,
    /// Collection-level scripts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<PostmanEvent>,
    /// Top-level folders and requests.
    #[serde(default)]
    pub item: Vec<PostmanItem>,
}

impl PostmanCollection {
    /// Iterates over every request item, depth-first, with the name of its
    /// enclosing folder path (joined with `/`).
    #[must_use]
    pub fn requests(&self) -> Vec<(String, &PostmanItem)> {
        let mut out = Vec::new();
        collect_requests(&self.item, "", &mut out);
        out
    }

    /// Number of folder items at any depth.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        count_folders(&self.item)
    }
}

fn collect_requests<'a>(
    items: &'a [PostmanItem],
    prefix: &str,
    out: &mut Vec<(String, &'a PostmanItem)>,
) {
    for item in items {
        if let Some(children) = &item.item {
            let path = if prefix.is_empty() {
                item.name.clone()
            } else {
                format!("{prefix}/{}", item.name)
            };
            collect_requests(children, &path, out);
        } else if item.is_request() {
            out.push((prefix.to_string(), item));
        }
    }
}

fn count_folders(items: &[PostmanItem]) -> usize {
    items
        .iter()
        .filter_map(|item| item.item.as_deref())
        .map(|children| 1 + count_folders(children))
        .sum()
}

/// Collection metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanInfo {
    /// Display name.
    pub name: String,
    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Schema URL.
    pub schema: String,
    /// Random id Postman uses to tell imports apart.
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
}

/// An item is either a folder (containing more items) or a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanItem {
    /// Folder or request name.
    pub name: String,
    /// If present, this item is a folder containing sub-items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Self>>,
    /// Events (scripts) attached to this item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<PostmanEvent>,
    /// If present, this item is a request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<PostmanRequest>,
}

impl PostmanItem {
    /// Creates a folder holding the given items.
    pub fn folder(name: impl Into<String>, items: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            item: Some(items),
            event: Vec::new(),
            request: None,
        }
    }

    /// Creates a request item.
    pub fn request(name: impl Into<String>, request: PostmanRequest) -> Self {
        Self {
            name: name.into(),
            item: None,
            event: Vec::new(),
            request: Some(request),
        }
    }

    /// Attaches a script to this item.
    #[must_use]
    pub fn with_event(mut self, event: PostmanEvent) -> Self {
        self.event.push(event);
        self
    }

    /// Returns true if this item is a request
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.request.is_some()
    }
}

/// Postman Request definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRequest {
    /// Per-request auth override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<PostmanAuth>,
    /// HTTP method, upper case.
    pub method: String,
    /// Ordered headers.
    #[serde(default)]
    pub header: Vec<PostmanHeader>,
    /// Optional body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PostmanBody>,
    /// Target URL.
    pub url: PostmanUrl,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostmanRequest {
    /// Creates a request with no headers, body or description.
    pub fn new(method: impl Into<String>, url: PostmanUrl) -> Self {
        Self {
            auth: None,
            method: method.into(),
            header: Vec::new(),
            body: None,
            url,
            description: None,
        }
    }

    /// Attaches a JSON body and the matching `Content-Type` header.
    #[must_use]
    pub fn with_json_body(mut self, body: &serde_json::Value) -> Self {
        self.header
            .push(PostmanHeader::new("Content-Type", "application/json"));
        self.body = Some(PostmanBody::raw_json(body));
        self
    }

    /// Overrides the collection auth for this request.
    #[must_use]
    pub fn with_auth(mut self, auth: PostmanAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Structured URL object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanUrl {
    /// Full URL as typed by the user.
    pub raw: String,
    /// Host segments.
    #[serde(default)]
    pub host: Vec<String>,
    /// Path segments.
    #[serde(default)]
    pub path: Vec<String>,
}

impl PostmanUrl {
    /// Builds a URL from a host (usually a `{{variable}}`) and path segments,
    /// deriving `raw` so that it always matches the decomposed form.
    pub fn from_segments(host: impl Into<String>, path: &[&str]) -> Self {
        let host = vec![host.into()];
        let path: Vec<String> = path.iter().map(|s| (*s).to_string()).collect();
        let raw = join_segments(&host, &path);
        Self { raw, host, path }
    }

    /// Rebuilds the raw URL from `host` and `path`.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        join_segments(&self.host, &self.path)
    }

    /// Returns true if `raw` matches the decomposed segments.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.raw == self.reconstruct()
    }
}

fn join_segments(host: &[String], path: &[String]) -> String {
    let host = host.join(".");
    if path.is_empty() {
        host
    } else {
        format!("{host}/{}", path.join("/"))
    }
}

/// Request header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanHeader {
    /// Header name.
    pub key: String,
    /// Header value.
    #[serde(default)]
    pub value: String,
}

impl PostmanHeader {
    /// Creates a header.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanBody {
    /// Body mode; this generator only writes `raw`.
    pub mode: String,
    /// Raw body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl PostmanBody {
    /// Creates a raw body holding `value` pretty-printed with 2-space indent.
    #[must_use]
    pub fn raw_json(value: &serde_json::Value) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: Some(format!("{value:#}")),
        }
    }
}

/// Auth scheme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// `Authorization: Bearer <token>`.
    Bearer,
    /// Explicitly no auth, overriding any inherited scheme.
    Noauth,
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanAuth {
    /// Scheme.
    #[serde(rename = "type")]
    pub auth_type: AuthType,
    /// Bearer parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bearer: Vec<PostmanAuthParam>,
}

impl PostmanAuth {
    /// Bearer auth whose token is `token` (typically a `{{variable}}`).
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            auth_type: AuthType::Bearer,
            bearer: vec![PostmanAuthParam {
                key: "token".to_string(),
                value: token.into(),
                param_type: "string".to_string(),
            }],
        }
    }

    /// Auth override that disables inherited auth.
    #[must_use]
    pub const fn noauth() -> Self {
        Self {
            auth_type: AuthType::Noauth,
            bearer: Vec::new(),
        }
    }

    /// Get a parameter value by key
    #[must_use]
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.bearer
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// Auth parameter (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanAuthParam {
    /// Parameter name.
    pub key: String,
    /// Parameter value.
    pub value: String,
    /// Value type, `string` for tokens.
    #[serde(rename = "type")]
    pub param_type: String,
}

/// When a script runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptListen {
    /// Before the request is sent.
    Prerequest,
    /// After the response arrives.
    Test,
}

/// Event (pre-request or test script)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanEvent {
    /// Trigger.
    pub listen: ScriptListen,
    /// Script body.
    pub script: PostmanScript,
}

/// Script definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanScript {
    /// Source lines.
    pub exec: Vec<String>,
    /// MIME type of the source.
    #[serde(rename = "type")]
    pub script_type: String,
}

impl PostmanScript {
    /// Wraps JavaScript source, one `exec` entry per line.
    #[must_use]
    pub fn javascript(source: &str) -> Self {
        Self {
            exec: source.lines().map(str::to_string).collect(),
            script_type: "text/javascript".to_string(),
        }
    }
}
