use anyhow::{bail, Result};
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::commands::excerpt::excerpt;
use crate::commands::filter::{filter_pages, NOTHING_SELECTED};
use crate::commands::{paths_conflict, resolve_output, SAME_PATHS};
use crate::page_range::PageRange;
use crate::pdf::{Dimension, DimensionIndex, PdfDocument};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfExcerptRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page range: '7', '3:', ':10' or '1:5' (1-based, inclusive)")]
    pub range: String,
    #[schemars(description = "Output file path (default: a new temporary .pdf file)")]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfFilterRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(
        description = "Indices from pdf_dimensions of the dimension groups whose pages are removed"
    )]
    pub remove: Vec<usize>,
    #[schemars(description = "Output file path (default: a new temporary .pdf file)")]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "List the distinct page dimensions (media box width x height, in points) of a PDF and the 1-based pages that have each one")]
    fn pdf_dimensions(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        to_json(dimensions(&path))
    }

    #[tool(description = "Extract a contiguous page range from a PDF into a new file. Range syntax: '7', '3:', ':10', '1:5'.")]
    fn pdf_excerpt(&self, Parameters(req): Parameters<PdfExcerptRequest>) -> String {
        to_json(excerpt_to_file(&req))
    }

    #[tool(description = "Write a copy of a PDF without the pages of the given dimension groups (indices as returned by pdf_dimensions)")]
    fn pdf_filter(&self, Parameters(req): Parameters<PdfFilterRequest>) -> String {
        to_json(filter_to_file(&req))
    }
}

fn to_json<T: Serialize>(result: Result<T>) -> String {
    match result {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => format!("Error: {}", e),
    }
}

fn dimensions(path: &str) -> Result<Vec<DimensionResult>> {
    let doc = PdfDocument::open(path)?;
    let index = DimensionIndex::build(&doc)?;
    Ok(index
        .iter()
        .enumerate()
        .map(|(index, group)| DimensionResult {
            index,
            width: group.dimension.width,
            height: group.dimension.height,
            pages: group.pages.iter().copied().collect(),
        })
        .collect())
}

fn check_paths(input: &str, output: Option<&str>) -> Result<()> {
    if paths_conflict(Path::new(input), output.map(Path::new)) {
        bail!(SAME_PATHS);
    }
    Ok(())
}

fn excerpt_to_file(req: &PdfExcerptRequest) -> Result<ExcerptResult> {
    check_paths(&req.path, req.output.as_deref())?;
    let doc = PdfDocument::open(&req.path)?;
    let range = PageRange::parse(&req.range, doc.page_count())?;

    let output = resolve_output(req.output.as_deref().map(Path::new))?;
    let mut new_doc = excerpt(&doc, &range)?;
    PdfDocument::save(&mut new_doc, &output)?;

    Ok(ExcerptResult {
        output_path: output.display().to_string(),
        page_count: range.page_count(),
        start: range.start,
        end: range.end,
    })
}

fn filter_to_file(req: &PdfFilterRequest) -> Result<FilterResult> {
    check_paths(&req.path, req.output.as_deref())?;
    if req.remove.is_empty() {
        bail!(NOTHING_SELECTED);
    }

    let doc = PdfDocument::open(&req.path)?;
    let index = DimensionIndex::build(&doc)?;

    let mut remove: Vec<Dimension> = Vec::new();
    for &i in &req.remove {
        match index.get(i) {
            Some(group) => remove.push(group.dimension),
            None => bail!(
                "Dimension index {} is out of range (0-{})",
                i,
                index.len().saturating_sub(1)
            ),
        }
    }
    let removed_pages: Vec<u32> = index.pages_for(&remove).into_iter().collect();

    let output = resolve_output(req.output.as_deref().map(Path::new))?;
    let mut new_doc = filter_pages(&doc, &index, &remove)?;
    PdfDocument::save(&mut new_doc, &output)?;

    Ok(FilterResult {
        output_path: output.display().to_string(),
        page_count: doc.page_count() - removed_pages.len() as u32,
        removed_pages,
    })
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DimensionResult {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub pages: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ExcerptResult {
    pub output_path: String,
    pub page_count: u32,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FilterResult {
    pub output_path: String,
    pub page_count: u32,
    pub removed_pages: Vec<u32>,
}

#[tool_handler]
impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page tools. Use pdf_dimensions to see which page sizes a document has, \
                 pdf_filter to drop every page of chosen sizes, and pdf_excerpt to copy a \
                 page range into a new PDF."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();
    log::info!("serving MCP over stdio");

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
