//! Tool registry for MCP tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::arxiv::ArxivSource;
use crate::models::SearchRequest;

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search_arxiv")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Registry for all MCP tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry with the search tool backed by the given source
    pub fn from_source(source: Arc<ArxivSource>) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        registry.register(Tool {
            name: "search_arxiv".to_string(),
            description:
                "Search arXiv for recent papers in a category and return a plain-text digest"
                    .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "arXiv category to search (e.g., 'cs.AI', 'physics.hep-th')"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results",
                        "minimum": 1,
                        "maximum": 100,
                        "default": 5
                    }
                },
                "required": ["category"]
            }),
            handler: Arc::new(SearchArxivHandler { source }),
        });

        registry
    }

    fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// All registered tools
    pub fn all(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }
}

/// Handler for the `search_arxiv` tool.
///
/// Argument validation happens here, before any fetch; the pipeline
/// itself never returns an error past `search_digest`, so a successful
/// validation always produces a text result.
#[derive(Debug)]
pub struct SearchArxivHandler {
    pub source: Arc<ArxivSource>,
}

#[async_trait::async_trait]
impl ToolHandler for SearchArxivHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let category = args
            .get("category")
            .and_then(|v| v.as_str())
            .ok_or("Missing 'category' parameter")?;

        let max_results = match args.get("max_results") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or("Invalid 'max_results' parameter")?),
        };

        let request = SearchRequest::new(category, max_results).map_err(|e| e.to_string())?;

        Ok(Value::String(self.source.search_digest(&request).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        let source = Arc::new(ArxivSource::new().expect("source"));
        ToolRegistry::from_source(source)
    }

    #[test]
    fn test_registry_exposes_search_tool() {
        let registry = registry();
        let tool = registry.get("search_arxiv").expect("tool registered");
        assert_eq!(tool.input_schema["required"], json!(["category"]));
        assert_eq!(tool.input_schema["properties"]["max_results"]["default"], 5);
        assert_eq!(registry.all().count(), 1);
    }

    #[tokio::test]
    async fn test_handler_rejects_missing_category() {
        let registry = registry();
        let tool = registry.get("search_arxiv").unwrap();

        let err = tool.handler.execute(json!({})).await.unwrap_err();
        assert_eq!(err, "Missing 'category' parameter");
    }

    #[tokio::test]
    async fn test_handler_rejects_out_of_range_max_results() {
        let registry = registry();
        let tool = registry.get("search_arxiv").unwrap();

        let err = tool
            .handler
            .execute(json!({"category": "cs.AI", "max_results": 101}))
            .await
            .unwrap_err();
        assert!(err.contains("max_results must be between 1 and 100"));
    }

    #[tokio::test]
    async fn test_handler_rejects_non_integer_max_results() {
        let registry = registry();
        let tool = registry.get("search_arxiv").unwrap();

        let err = tool
            .handler
            .execute(json!({"category": "cs.AI", "max_results": -3}))
            .await
            .unwrap_err();
        assert_eq!(err, "Invalid 'max_results' parameter");
    }
}
