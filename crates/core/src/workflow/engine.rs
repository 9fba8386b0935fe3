//! Workflow execution engine.
//!
//! The engine drives the fixed stage sequence — research, generation,
//! integration, validation — over the injected providers, recording
//! logs, spans, and protocol messages as it goes. Stages are strictly
//! sequential; each one's output feeds the next.

use crate::config::models::RendererConfig;
use crate::providers::base::{ArtProvider, ProviderError, ResearchProvider, SandboxProvider};
use crate::providers::mock::{MockArtProvider, MockResearchProvider, MockSandboxProvider};
use crate::render;
use crate::trace::{NullSink, TraceRecorder, TraceSink};
use crate::workflow::run::{begin_stage, complete_run, create_run, fail_run, WorkflowRun};
use crate::workflow::WorkflowError;
use qw_protocol::agent_models::AgentId;
use qw_protocol::ipc::Event;
use qw_protocol::trace_models::LogKind;
use qw_protocol::workflow_models::{ArtStyle, QualityMetrics, RunState, WorkflowResult};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::sync::Mutex;

/// Fixed mock readability percentage reported by the QA stage.
const READABILITY: &str = "98.5%";

/// Fixed mock artistic quality score out of 10.
const ART_SCORE: f64 = 9.2;

/// Fixed mock wall-clock generation time.
const GENERATION_TIME: &str = "8.4s";

/// Display catalog of the tools a run exercises.
const TOOLS_USED: [&str; 6] = [
    "Weave",
    "Crew AI",
    "Exa",
    "BrowserBase",
    "Google Cloud",
    "Fly.io",
];

/// Display catalog of the protocols a run exercises.
const PROTOCOLS_USED: [&str; 3] = ["MCP", "A2A", "Custom QR-Art"];

/// The orchestrator name used in logs and protocol messages.
const ORCHESTRATOR: &str = "Crew AI";

/// The main workflow engine.
///
/// One engine may serve many sequential runs, but never two at once:
/// a `run()` call while another is in flight is rejected with
/// [`WorkflowError::Busy`]. Queuing, if wanted, is the caller's job.
pub struct WorkflowEngine {
    research: Arc<dyn ResearchProvider>,
    art: Arc<dyn ArtProvider>,
    sandbox: Arc<dyn SandboxProvider>,
    renderer: RendererConfig,
    sink: Arc<dyn TraceSink>,
    events_tx: Sender<Event>,
    busy: Mutex<()>,
}

impl WorkflowEngine {
    /// Create an engine with the mock providers and default renderer.
    ///
    /// # Arguments
    ///
    /// * `events_tx` - Channel for sending events to the UI
    pub fn new(events_tx: Sender<Event>) -> Self {
        Self {
            research: Arc::new(MockResearchProvider::new()),
            art: Arc::new(MockArtProvider::new()),
            sandbox: Arc::new(MockSandboxProvider::new()),
            renderer: RendererConfig::default(),
            sink: Arc::new(NullSink),
            events_tx,
            busy: Mutex::new(()),
        }
    }

    /// Replace the research provider.
    pub fn with_research(mut self, provider: Arc<dyn ResearchProvider>) -> Self {
        self.research = provider;
        self
    }

    /// Replace the art provider.
    pub fn with_art(mut self, provider: Arc<dyn ArtProvider>) -> Self {
        self.art = provider;
        self
    }

    /// Replace the sandbox provider.
    pub fn with_sandbox(mut self, provider: Arc<dyn SandboxProvider>) -> Self {
        self.sandbox = provider;
        self
    }

    /// Replace the renderer settings.
    pub fn with_renderer(mut self, renderer: RendererConfig) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the out-of-band trace sink.
    pub fn with_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Execute one workflow run.
    ///
    /// On success returns the assembled [`WorkflowResult`]; on failure
    /// the run terminates in `Errored` with exactly one error-kind log
    /// entry and no partial result.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::Busy`] if another run is in flight
    /// - [`WorkflowError::Stage`] if a provider step fails
    /// - [`WorkflowError::Render`] if compositing fails
    pub async fn run(&self, payload: &str, style: ArtStyle) -> Result<WorkflowResult, WorkflowError> {
        let _guard = self.busy.try_lock().map_err(|_| WorkflowError::Busy)?;

        let mut run = create_run(payload.to_string(), style);
        let mut trace = TraceRecorder::new(run.id, self.events_tx.clone(), Arc::clone(&self.sink));

        let _ = self
            .events_tx
            .send(Event::RunStarted {
                run_id: run.id,
                payload: run.payload.clone(),
                style,
            })
            .await;

        match self.drive(&mut run, &mut trace).await {
            Ok(result) => {
                trace
                    .log(
                        ORCHESTRATOR,
                        "Multi-agent workflow completed successfully!",
                        LogKind::Success,
                    )
                    .await;
                trace
                    .log("Weave", "Workflow trace captured and stored", LogKind::Trace)
                    .await;
                complete_run(&mut run, &self.events_tx).await;
                Ok(result)
            }
            Err(e) => {
                // Fail-fast: caught once here, logged once, no retries.
                trace.log("System", format!("Error: {e}"), LogKind::Error).await;
                fail_run(&mut run, &self.events_tx, e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Run the four stages in order and assemble the result.
    async fn drive(
        &self,
        run: &mut WorkflowRun,
        trace: &mut TraceRecorder,
    ) -> Result<WorkflowResult, WorkflowError> {
        trace
            .log(ORCHESTRATOR, "Initializing multi-agent orchestration", LogKind::System)
            .await;
        trace.log("Weave", "Starting workflow trace", LogKind::Trace).await;

        // Phase 1: research.
        let researcher = AgentId::StyleResearcher.display_name();
        begin_stage(run, &self.events_tx, RunState::Researching, AgentId::StyleResearcher).await;
        trace
            .log(researcher, "Activated for artistic research", LogKind::Agent)
            .await;
        trace.protocol(ORCHESTRATOR, researcher, "Begin research phase").await;

        let query = format!("{} artistic QR code inspiration", run.style);
        trace
            .log("Exa API", format!("Searching for: \"{query}\""), LogKind::Search)
            .await;
        let results = self
            .research
            .search(&query)
            .await
            .map_err(|source| stage_error(RunState::Researching, source))?;
        trace.protocol(researcher, "Exa API", format!("Search: {query}")).await;

        trace
            .log("BrowserBase", "Launching headless browser automation", LogKind::Automation)
            .await;
        trace
            .log("Stagehand", "Scraping art references from discovered URLs", LogKind::Automation)
            .await;
        let urls: Vec<String> = results.iter().map(|r| r.url.clone()).collect();
        let references = self
            .research
            .browse(&urls)
            .await
            .map_err(|source| stage_error(RunState::Researching, source))?;
        trace
            .protocol("BrowserBase", researcher, "Art references extracted")
            .await;

        // Phase 2: art generation.
        let generator = AgentId::ArtGenerator.display_name();
        begin_stage(run, &self.events_tx, RunState::Generating, AgentId::ArtGenerator).await;
        trace
            .log(generator, "Activated for AI art generation", LogKind::Agent)
            .await;
        trace.protocol(ORCHESTRATOR, generator, "Begin generation phase").await;

        trace
            .log("Google Cloud", "Initializing Vertex AI for art generation", LogKind::Ai)
            .await;
        trace
            .log("A2A Protocol", "Sending generation request to AI model", LogKind::Protocol)
            .await;
        let prompt = format!("Generate {} artistic elements for QR code integration", run.style);
        let concept = self
            .art
            .generate(&prompt, &references)
            .await
            .map_err(|source| stage_error(RunState::Generating, source))?;
        trace
            .protocol(
                "Google Cloud",
                generator,
                format!("Art elements generated (confidence {:.2})", concept.confidence),
            )
            .await;

        trace
            .log("Fly.io", "Spawning secure code execution sandbox", LogKind::Execution)
            .await;
        trace
            .log("Fly.io", "Executing QR generation algorithm", LogKind::Execution)
            .await;
        let report = self
            .sandbox
            .execute("qr_art_generator.py")
            .await
            .map_err(|source| stage_error(RunState::Generating, source))?;
        if !report.success {
            return Err(stage_error(
                RunState::Generating,
                ProviderError::ExecutionError("sandbox reported failure".to_string()),
            ));
        }
        trace
            .protocol(
                "Fly.io",
                generator,
                format!("Sandbox execution complete in {}", report.execution_time),
            )
            .await;

        // Phase 3: integration. The renderer owns the raster target for
        // the duration of the call.
        let integrator = AgentId::QrIntegrator.display_name();
        begin_stage(run, &self.events_tx, RunState::Integrating, AgentId::QrIntegrator).await;
        trace
            .log(integrator, "Activated for QR-art fusion", LogKind::Agent)
            .await;
        trace.protocol(ORCHESTRATOR, integrator, "Begin integration phase").await;

        let canvas = render::compose(&run.payload, run.style, &concept, &self.renderer)?;
        let image = canvas.to_data_uri();
        trace.protocol(integrator, "Canvas API", "QR-art fusion complete").await;

        // Phase 4: validation. The metrics are declarative mock values,
        // not computed from the image.
        let qa = AgentId::QualityAssurance.display_name();
        begin_stage(run, &self.events_tx, RunState::Validating, AgentId::QualityAssurance).await;
        trace.log(qa, "Activated for quality validation", LogKind::Agent).await;
        trace.protocol(ORCHESTRATOR, qa, "Begin validation phase").await;
        trace
            .log(qa, format!("QR code readability: {READABILITY}"), LogKind::Validation)
            .await;
        trace
            .log(qa, format!("Artistic quality score: {ART_SCORE}/10"), LogKind::Validation)
            .await;

        Ok(WorkflowResult {
            id: run.id,
            payload: run.payload.clone(),
            style: run.style,
            image,
            tools_used: TOOLS_USED.iter().map(|t| t.to_string()).collect(),
            protocols_used: PROTOCOLS_USED.iter().map(|p| p.to_string()).collect(),
            metrics: QualityMetrics {
                readability: READABILITY.to_string(),
                art_score: ART_SCORE,
                generation_time: GENERATION_TIME.to_string(),
            },
        })
    }
}

fn stage_error(stage: RunState, source: ProviderError) -> WorkflowError {
    WorkflowError::Stage { stage, source }
}
