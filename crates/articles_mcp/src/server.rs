use crate::config::Config;
use crate::errors::McpResult;
use crate::services::{ArticleService, list_articles_prompt};
use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use rmcp::{ServiceExt, transport::stdio};

use crate::models::{GetArticlesRequest, ListArticlesPromptArgs};

#[derive(Clone)]
pub struct ArticlesServer {
    tool_router: ToolRouter<ArticlesServer>,
    prompt_router: PromptRouter<ArticlesServer>,
    service: ArticleService,
}

impl ArticlesServer {
    pub fn new(service: ArticleService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
            service,
        }
    }

    fn build_list_articles_prompt(&self, args: &ListArticlesPromptArgs) -> GetPromptResult {
        let text = list_articles_prompt(*args.number(), args.condition());
        GetPromptResult {
            description: Some(format!("List {} alayman's articles", args.number())),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        }
    }
}

#[tool_router]
impl ArticlesServer {
    #[tool(
        description = "Retrieve a paginated list of blog articles from the API.\n\nReturns the requested page of articles together with the total count, the offset and limit used, and a has_more flag. limit defaults to 20 (max 100), offset defaults to 0."
    )]
    async fn get_articles(
        &self,
        Parameters(req): Parameters<GetArticlesRequest>,
    ) -> McpResult<CallToolResult> {
        tracing::debug!(
            "get_articles called with limit={} offset={}",
            req.limit(),
            req.offset()
        );

        let page = self.service.get_articles(&req).await?;
        tracing::info!(
            "Returning {} of {} articles (offset {}, has_more {})",
            page.articles.len(),
            page.total,
            page.offset,
            page.has_more
        );

        Ok(CallToolResult::success(vec![Content::json(&page)?]))
    }
}

#[prompt_router]
impl ArticlesServer {
    /// Generate a prompt to list alayman's articles with optional conditions
    #[prompt(name = "list_articles")]
    async fn list_articles(
        &self,
        Parameters(args): Parameters<ListArticlesPromptArgs>,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<GetPromptResult> {
        Ok(self.build_list_articles_prompt(&args))
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for ArticlesServer {
    fn get_info(&self) -> ServerInfo {
        let endpoint_state = if self.service.config().api_url.is_some() {
            "configured"
        } else {
            "not configured"
        };
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Articles MCP Server for a blog's article feed. Tool: get_articles (paginated with limit 1-100 and offset). Prompt: list_articles (instructions for listing articles with an optional condition). Upstream endpoint is {}.",
                endpoint_state
            )),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Articles MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let service = ArticleService::new(config)?;
    let server = ArticlesServer::new(service);

    let server = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    server.waiting().await?;

    Ok(())
}
