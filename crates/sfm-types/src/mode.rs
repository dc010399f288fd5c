//! AI modes offered by the workspace on the home page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    Document,
    Project,
    Research,
    Auto,
}

impl AiMode {
    /// Modes shown as cards; `Auto` has its own button
    pub fn selectable() -> &'static [AiMode] {
        &[AiMode::Document, AiMode::Project, AiMode::Research]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AiMode::Document => "document",
            AiMode::Project => "project",
            AiMode::Research => "research",
            AiMode::Auto => "auto",
        }
    }

    /// Unknown slugs fall back to auto-detect
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "document" => AiMode::Document,
            "project" => AiMode::Project,
            "research" => AiMode::Research,
            _ => AiMode::Auto,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AiMode::Document => "Document Summarization",
            AiMode::Project => "Project Management",
            AiMode::Research => "Research Simplification",
            AiMode::Auto => "Auto-Detect Mode",
        }
    }

    /// Badge shown in the workspace header
    pub fn workspace_badge(&self) -> &'static str {
        match self {
            AiMode::Document => "Document Analysis",
            AiMode::Project => "Task Organization",
            AiMode::Research => "Data Analysis",
            AiMode::Auto => "Smart Detection",
        }
    }

    /// Badge shown on the mode card
    pub fn card_badge(&self) -> &'static str {
        match self {
            AiMode::Document => "Popular",
            AiMode::Project => "Efficient",
            AiMode::Research => "Advanced",
            AiMode::Auto => "Smart",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AiMode::Document => "Paste your document content here or describe what you need summarized...",
            AiMode::Project => "Describe your project, tasks, deadlines, and team members...",
            AiMode::Research => "Share your research data, findings, or complex information to analyze...",
            AiMode::Auto => "Describe your task or paste your content. I'll automatically detect the best approach...",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AiMode::Document => "Transform lengthy documents into clear, structured summaries with key insights and actionable points.",
            AiMode::Project => "Intelligent task organization with automated role assignments and workflow optimization suggestions.",
            AiMode::Research => "Convert complex research data into digestible insights with visual representations and clear conclusions.",
            AiMode::Auto => "Not sure which mode to choose? We'll help you decide based on your input.",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            AiMode::Document => &[
                "Multi-level summaries (beginner to expert)",
                "Key risk and opportunity identification",
                "Structured output formats",
                "Context-aware analysis",
            ],
            AiMode::Project => &[
                "Automatic task identification",
                "Deadline and priority analysis",
                "Role assignment suggestions",
                "Process improvement recommendations",
            ],
            AiMode::Research => &[
                "Data pattern recognition",
                "Visual insight generation",
                "Conclusion synthesis",
                "Recommendation engine",
            ],
            AiMode::Auto => &[],
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            AiMode::Document => "Summarize the following document into a clear, structured summary. \
                List the key points, identify risks and opportunities, and finish with actionable next steps.",
            AiMode::Project => "Organize the following project description. \
                Identify the tasks, their deadlines and priorities, suggest role assignments for the team, \
                and recommend process improvements.",
            AiMode::Research => "Simplify the following research material. \
                Point out the important data patterns, synthesize the conclusions, \
                and give clear recommendations.",
            AiMode::Auto => "Decide whether the following content is best handled as a document summary, \
                a project plan, or a research analysis. State which approach you chose, then respond in that format.",
        }
    }

    /// Prompt sent to the generative collaborator for this mode
    pub fn build_prompt(&self, complexity: Complexity, input: &str) -> String {
        format!(
            "{}\n\n{}\nFormat the answer in Markdown with headings.\n\nContent:\n{}",
            self.instruction(),
            complexity.audience(),
            input.trim()
        )
    }
}

/// Reader level the workspace output is tailored for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl Complexity {
    pub fn all() -> &'static [Complexity] {
        &[Complexity::Beginner, Complexity::Intermediate, Complexity::Expert]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Expert => "Expert",
        }
    }

    fn audience(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Write for a beginner: use plain language, short sentences and no jargon.",
            Complexity::Intermediate => "Write for a professional audience, in the style of an executive summary.",
            Complexity::Expert => "Write a detailed technical analysis for an expert audience.",
        }
    }
}
