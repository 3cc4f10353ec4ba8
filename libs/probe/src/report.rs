use std::fmt;

/// The seven probe steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    Connect,
    Ping,
    ListDatabases,
    Insert,
    Find,
    Cleanup,
    Close,
}

impl ProbeStep {
    /// Human-readable step name used in console lines
    pub fn name(&self) -> &'static str {
        match self {
            ProbeStep::Connect => "connect",
            ProbeStep::Ping => "ping",
            ProbeStep::ListDatabases => "list",
            ProbeStep::Insert => "insert",
            ProbeStep::Find => "find",
            ProbeStep::Cleanup => "cleanup",
            ProbeStep::Close => "close",
        }
    }
}

impl fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single probe step
///
/// `outcome` carries the success detail (e.g. the inserted id, the database
/// names) or the underlying error message.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: ProbeStep,
    pub outcome: Result<String, String>,
    pub elapsed_ms: u64,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Render the console line for this outcome
    ///
    /// Success: `✅ <step>: <detail> (<elapsed>ms)`
    /// Failure: `❌ <step>: <error>`
    pub fn render(&self) -> String {
        match &self.outcome {
            Ok(detail) => format!("✅ {}: {} ({}ms)", self.step, detail, self.elapsed_ms),
            Err(error) => format!("❌ {}: {}", self.step, error),
        }
    }
}

/// Ordered record of a probe run
///
/// Outcomes are appended in execution order; on failure the report ends with
/// the failing step followed by the close outcome (the connection is released
/// on every exit path).
#[derive(Debug, Default)]
pub struct ProbeReport {
    outcomes: Vec<StepOutcome>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_ok(&mut self, step: ProbeStep, detail: impl Into<String>, elapsed_ms: u64) {
        self.outcomes.push(StepOutcome {
            step,
            outcome: Ok(detail.into()),
            elapsed_ms,
        });
    }

    pub(crate) fn record_err(
        &mut self,
        step: ProbeStep,
        error: impl Into<String>,
        elapsed_ms: u64,
    ) {
        self.outcomes.push(StepOutcome {
            step,
            outcome: Err(error.into()),
            elapsed_ms,
        });
    }

    /// All step outcomes, in execution order
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    /// Whether every recorded step succeeded
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::succeeded)
    }

    /// The failing step, if any
    pub fn failure(&self) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| !o.succeeded())
    }

    /// Rendered console lines, one per step, in execution order
    pub fn lines(&self) -> Vec<String> {
        self.outcomes.iter().map(StepOutcome::render).collect()
    }
}
