use std::collections::HashMap;
use std::fmt;

/// Represents a parsed HTTP request from a client.
///
/// Method and version are lowercased, header names are lowercased and
/// values trimmed. The query string has already been split off the path.
/// A `Request` is frozen once built; use [`RequestBuilder`] to make one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    path: String,
    query: String,
    version: String,
    headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    query: String,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.trim().to_lowercase());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets path and query from a request target, splitting at the first `?`.
    pub fn target(self, target: &str) -> Self {
        match target.trim().split_once('?') {
            Some((path, query)) => self.path(path).query(query),
            None => self.path(target.trim()).query(""),
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.trim().to_lowercase());
        self
    }

    /// Adds a header, replacing an earlier one with the same name.
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers
            .insert(key.trim().to_lowercase(), value.trim().to_string());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            query: self.query,
            version: self.version.unwrap_or_else(|| "http/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Request {
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The resource path without its query string (e.g., "/index.html")
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Everything after the first `?` of the target, empty if there was none
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_lowercase())
            .map(|v| v.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Renders the request the way the `header=show` diagnostic echoes it.
///
/// The first line is `method path[?query] version`, followed by one
/// `key: value` line per header, sorted by name.
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        write!(f, " {}", self.version)?;

        let mut keys: Vec<&String> = self.headers.keys().collect();
        keys.sort();
        for key in keys {
            write!(f, "\n{}: {}", key, self.headers[key])?;
        }
        Ok(())
    }
}
