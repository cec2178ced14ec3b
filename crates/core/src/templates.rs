//! Bundled, read-only template catalog used to seed new prompts

use serde::Serialize;

use crate::db::prompts::Category;

/// A catalog entry. Placeholders in `template` are written as `[LIKE THIS]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id:          &'static str,
    pub name:        &'static str,
    pub description: &'static str,
    pub category:    Category,
    pub template:    &'static str,
}

static CATALOG: &[Template] = &[
    Template {
        id:          "text-analysis",
        name:        "Text Analysis",
        description: "Break a passage down into themes, tone, arguments and style",
        category:    Category::Analysis,
        template:    "Analyze the following text and provide insights on:\n1. Main themes\n2. Tone and sentiment\n3. Key arguments\n4. Writing style\n\nText: [INSERT TEXT HERE]",
    },
    Template {
        id:          "code-review",
        name:        "Code Review",
        description: "Structured feedback on quality, bugs, performance and practices",
        category:    Category::Technical,
        template:    "Review this code and provide feedback on:\n1. Code quality and readability\n2. Potential bugs or issues\n3. Performance optimizations\n4. Best practices\n\n```\n[INSERT CODE HERE]\n```",
    },
    Template {
        id:          "story-writing",
        name:        "Story Writing",
        description: "A short story built from genre, character, setting and conflict",
        category:    Category::Creative,
        template:    "Write a compelling short story with the following elements:\n- Genre: [SPECIFY GENRE]\n- Main character: [DESCRIBE CHARACTER]\n- Setting: [DESCRIBE SETTING]\n- Conflict: [DESCRIBE CONFLICT]\n\nMake it engaging and approximately 500 words.",
    },
    Template {
        id:          "marketing-copy",
        name:        "Marketing Copy",
        description: "Persuasive copy aimed at a specific audience and call to action",
        category:    Category::Business,
        template:    "Create persuasive marketing copy for:\n- Product/Service: [DESCRIBE PRODUCT]\n- Target audience: [DESCRIBE AUDIENCE]\n- Key benefits: [LIST BENEFITS]\n- Call to action: [SPECIFY CTA]\n\nTone should be [SPECIFY TONE]",
    },
    Template {
        id:          "step-by-step",
        name:        "Step-by-Step Solution",
        description: "Work through a problem one explicit step at a time",
        category:    Category::General,
        template:    "Solve this problem using a step-by-step approach:\n\nProblem: [DESCRIBE PROBLEM]\n\nPlease:\n1. Break down the problem\n2. Identify key components\n3. Provide a detailed solution\n4. Explain your reasoning\n5. Suggest alternatives if applicable",
    },
    Template {
        id:          "decision-framework",
        name:        "Decision Framework",
        description: "Weigh options with pros and cons, risks and a recommendation",
        category:    Category::Business,
        template:    "Help me make a decision using a structured framework:\n\nDecision: [DESCRIBE DECISION]\n\nPlease provide:\n1. Pros and cons analysis\n2. Risk assessment\n3. Alternative options\n4. Recommendation with reasoning\n5. Implementation steps",
    },
    Template {
        id:          "concept-explainer",
        name:        "Concept Explainer",
        description: "Teach a concept at a chosen level with analogies and a quiz",
        category:    Category::Educational,
        template:    "Explain [CONCEPT] to a [AUDIENCE LEVEL] learner.\n\nInclude:\n1. A one-sentence definition\n2. An everyday analogy\n3. A worked example\n4. Three common misconceptions\n5. A short quiz with answers",
    },
    Template {
        id:          "literature-review",
        name:        "Literature Review",
        description: "Summarize and compare sources on a research question",
        category:    Category::Research,
        template:    "Research question: [STATE QUESTION]\n\nFor the sources below, provide:\n1. A summary of each source's main finding\n2. Points of agreement and disagreement\n3. Gaps in the current evidence\n4. Suggested next steps for research\n\nSources:\n[LIST SOURCES]",
    },
];

/// Access to the bundled templates
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateLibrary;

impl TemplateLibrary {
    /// Every template in catalog order
    pub fn list_all(&self) -> &'static [Template] {
        CATALOG
    }

    /// Look up a template by id
    pub fn get(&self, id: &str) -> Option<&'static Template> {
        CATALOG.iter().find(|t| t.id == id)
    }

    /// Templates belonging to `category`, in catalog order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static Template> + Clone {
        CATALOG.iter().filter(move |t| t.category == category)
    }

    /// Text to seed the editor with when `template` is chosen
    pub fn use_template(&self, template: &Template) -> String {
        template.template.to_string()
    }
}
