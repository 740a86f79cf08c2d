//! Placeholder rendering.
//!
//! Wraps the template engine behind a single entry point so the rest of the
//! crate treats rendering as an opaque text to text capability. The engine
//! runs in strict mode: a reference to a value missing from the context is
//! an error, never a silent empty string. HTML escaping is disabled, the
//! rendered output is project source rather than markup.

use std::collections::HashMap;

use handlebars::Handlebars;
use serde_json::Value;

/// User supplied parameter values, applied to every rendered path and file
/// during a generation run. Read-only for the duration of the run.
pub type GenerationContext = HashMap<String, Value>;

/// Template renderer applying a generation context to text fragments.
pub struct Renderer {
    engine: Handlebars<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_escape_fn(handlebars::no_escape);
        Self { engine }
    }

    /// Render a text fragment with the given context.
    pub fn render(
        &self,
        text: &str,
        context: &GenerationContext,
    ) -> Result<String, handlebars::RenderError> {
        self.engine.render_template(text, context)
    }
}
