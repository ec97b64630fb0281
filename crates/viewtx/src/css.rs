//! Typed CSS generation
//!
//! Small CSS model used by the animation catalog so that every rule and
//! keyframe block is rendered with the same layout.

/// A CSS rule with selector and declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// CSS selector
    pub selector: String,
    /// Property-value pairs
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    /// Create a new CSS rule
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration
    #[must_use]
    pub fn declaration(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    /// Render rule to CSS string
    #[must_use]
    pub fn render(&self) -> String {
        if self.declarations.is_empty() {
            return String::new();
        }

        let decls = self
            .declarations
            .iter()
            .map(|(prop, val)| format!("    {prop}: {val};"))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{} {{\n{}\n}}", self.selector, decls)
    }
}

/// One step of a `@keyframes` block (`from`, `to`, or a percentage)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeStep {
    /// Step selector
    pub offset: String,
    /// Property-value pairs
    pub declarations: Vec<(String, String)>,
}

impl KeyframeStep {
    /// Create an empty step at the given offset
    #[must_use]
    pub fn new(offset: impl Into<String>) -> Self {
        Self {
            offset: offset.into(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration
    #[must_use]
    pub fn declaration(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_string(), value.into()));
        self
    }

    fn render(&self) -> String {
        let decls = self
            .declarations
            .iter()
            .map(|(prop, val)| format!("{prop}: {val};"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("    {} {{ {} }}", self.offset, decls)
    }
}

/// A named `@keyframes` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframesRule {
    /// Animation name referenced from `animation:` declarations
    pub name: String,
    /// Ordered steps
    pub steps: Vec<KeyframeStep>,
}

impl KeyframesRule {
    /// Create a new keyframes block
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step
    #[must_use]
    pub fn step(mut self, step: KeyframeStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Render to CSS string
    #[must_use]
    pub fn render(&self) -> String {
        let steps = self
            .steps
            .iter()
            .map(KeyframeStep::render)
            .collect::<Vec<_>>()
            .join("\n");
        format!("@keyframes {} {{\n{}\n}}", self.name, steps)
    }
}

/// A top-level stylesheet item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssItem {
    /// Plain rule
    Rule(CssRule),
    /// `@keyframes` block
    Keyframes(KeyframesRule),
}

impl CssItem {
    fn render(&self) -> String {
        match self {
            Self::Rule(rule) => rule.render(),
            Self::Keyframes(keyframes) => keyframes.render(),
        }
    }
}

/// Ordered collection of rules and keyframe blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    items: Vec<CssItem>,
}

impl Stylesheet {
    /// Create an empty stylesheet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a CSS rule
    #[must_use]
    pub fn rule(mut self, rule: CssRule) -> Self {
        self.items.push(CssItem::Rule(rule));
        self
    }

    /// Add a keyframes block
    #[must_use]
    pub fn keyframes(mut self, keyframes: KeyframesRule) -> Self {
        self.items.push(CssItem::Keyframes(keyframes));
        self
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[CssItem] {
        &self.items
    }

    /// Render the stylesheet. Every item ends with a newline so rendered
    /// sheets can be concatenated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = String::new();
        for item in &self.items {
            let rendered = item.render();
            if rendered.is_empty() {
                continue;
            }
            content.push_str(&rendered);
            content.push('\n');
        }
        content
    }
}
