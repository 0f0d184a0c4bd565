//! Output templates, template selection, and rendering.

use crate::escape::{escape_content, pretty_escape_content};
use crate::options::TransformOptions;

/// Declares a fresh module per file, named after the translation URL.
pub const MODULE_PER_FILE: &str = r#"angular.module('<%= moduleName %>', []).run(['$translationCache', function($translationCache) {
  $translationCache.put('<%= translation.url %>',
    '<%= translation.prettyEscapedContent %>');
}]);
"#;

/// Reuses one named module across files, declaring it on first use.
pub const SINGLE_MODULE: &str = r#"(function(module) {
try {
  module = angular.module('<%= moduleName %>');
} catch (e) {
  module = angular.module('<%= moduleName %>', []);
}
module.run(['$translationCache', function($translationCache) {
  $translationCache.put('<%= translation.url %>',
    '<%= translation.prettyEscapedContent %>');
}]);
})();
"#;

/// Runs against a named module the application has already declared.
pub const SINGLE_DECLARED_MODULE: &str = r#"angular.module('<%= moduleName %>').run(['$translationCache', function($translationCache) {
  $translationCache.put('<%= translation.url %>',
    '<%= translation.prettyEscapedContent %>');
}]);
"#;

/// The built-in output templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// One self-contained module per translation file.
    ModulePerFile,
    /// One shared module, declared on demand.
    SingleModule,
    /// One shared module that must already exist.
    SingleDeclaredModule,
}

impl Template {
    /// The template source with `<%= ... %>` placeholders.
    pub fn source(self) -> &'static str {
        match self {
            Self::ModulePerFile => MODULE_PER_FILE,
            Self::SingleModule => SINGLE_MODULE,
            Self::SingleDeclaredModule => SINGLE_DECLARED_MODULE,
        }
    }
}

/// The template chosen for one file: a built-in, or the caller's override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedTemplate<'a> {
    /// One of the built-in templates.
    Builtin(Template),
    /// A caller-supplied template, rendered with the same substitution.
    Custom(&'a str),
}

impl<'a> SelectedTemplate<'a> {
    /// The template source to render.
    pub fn source(&self) -> &'a str {
        match *self {
            Self::Builtin(template) => template.source(),
            Self::Custom(source) => source,
        }
    }
}

/// Picks the template for one file.
///
/// A non-empty template override always wins. A configured module name
/// selects the shared-module templates, with `declare_module` choosing
/// between declaring the module on demand and requiring it to exist.
/// Without a module name every file declares its own module.
pub fn select_template(options: &TransformOptions) -> SelectedTemplate<'_> {
    if let Some(custom) = options.template_override() {
        return SelectedTemplate::Custom(custom);
    }
    let template = if options.has_module_name() {
        if options.declare_module {
            Template::SingleModule
        } else {
            Template::SingleDeclaredModule
        }
    } else {
        Template::ModulePerFile
    };
    SelectedTemplate::Builtin(template)
}

/// The parameter record templates are rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationContext {
    /// Value of `moduleName`.
    pub module_name: String,
    /// Value of `translation.url`, the cache key.
    pub url: String,
    /// Value of `translation.content`, the raw text.
    pub content: String,
    /// Value of `translation.escapedContent`.
    pub escaped_content: String,
    /// Value of `translation.prettyEscapedContent`.
    pub pretty_escaped_content: String,
}

impl TranslationContext {
    /// Builds the render record, computing both escaped forms of `content`.
    pub fn new(
        module_name: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            module_name: module_name.into(),
            url: url.into(),
            escaped_content: escape_content(&content),
            pretty_escaped_content: pretty_escape_content(&content),
            content,
        }
    }

    fn get(&self, expression: &str) -> Option<&str> {
        match expression {
            "moduleName" => Some(&self.module_name),
            "translation.url" => Some(&self.url),
            "translation.content" => Some(&self.content),
            "translation.escapedContent" => Some(&self.escaped_content),
            "translation.prettyEscapedContent" => Some(&self.pretty_escaped_content),
            _ => None,
        }
    }
}

/// Renders `<%= expression %>` placeholders against the context.
///
/// Whitespace around the expression is ignored. Unknown expressions render
/// as the empty string; an unterminated `<%=` is emitted verbatim.
pub fn render_template(template: &str, context: &TranslationContext) -> String {
    const OPEN: &str = "<%=";
    const CLOSE: &str = "%>";

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let tail = &rest[start + OPEN.len()..];
        match tail.find(CLOSE) {
            Some(end) => {
                if let Some(value) = context.get(tail[..end].trim()) {
                    output.push_str(value);
                }
                rest = &tail[end + CLOSE.len()..];
            }
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}
