//! Transform configuration.

use std::fmt;

use pipeline_file::PipelineFile;

/// Computes a module name from the file being transformed.
pub type ModuleNameFn = Box<dyn Fn(&PipelineFile) -> String + Send + Sync>;

/// Rewrites a resolved URL. Receives the URL after prefix stripping and
/// prepending, together with the file it belongs to.
pub type RenameFn = Box<dyn Fn(&str, &PipelineFile) -> String + Send + Sync>;

/// The target module name: fixed up front, or computed per file.
pub enum ModuleName {
    /// One fixed module name shared by every file.
    Static(String),
    /// A module name derived from each file.
    Computed(ModuleNameFn),
}

impl ModuleName {
    /// An empty static name counts as no name at all; it falls back to the
    /// resolved URL like an unset one.
    pub(crate) fn is_set(&self) -> bool {
        match self {
            Self::Static(name) => !name.is_empty(),
            Self::Computed(_) => true,
        }
    }
}

impl fmt::Debug for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(name) => f.debug_tuple("Static").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Options shared by every file of one pipeline invocation.
///
/// All fields are optional. A default-constructed value declares one module
/// per file, named after the file's resolved URL. The transform never
/// mutates the options, so one value can drive a whole run.
pub struct TransformOptions {
    /// Target module name. When unset, each file declares its own module
    /// named after its URL.
    pub module_name: Option<ModuleName>,
    /// Whether the generated script may declare the named module itself.
    /// With `false` the script assumes the application already declared it.
    pub declare_module: bool,
    /// Prefix removed from the front of the derived URL, once, when it
    /// matches exactly.
    pub strip_prefix: Option<String>,
    /// Prefix prepended to the derived URL. Plain concatenation, no
    /// separator is inserted.
    pub prefix: Option<String>,
    /// Final say on the URL, applied after prefix processing.
    pub rename: Option<RenameFn>,
    /// Template override replacing the built-in template selection. The
    /// override is rendered with the same placeholder substitution.
    pub template: Option<String>,
}

impl TransformOptions {
    /// Creates options that declare one module per file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed module name.
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(ModuleName::Static(name.into()));
        self
    }

    /// Derives the module name from each file.
    pub fn with_module_name_fn(
        mut self,
        f: impl Fn(&PipelineFile) -> String + Send + Sync + 'static,
    ) -> Self {
        self.module_name = Some(ModuleName::Computed(Box::new(f)));
        self
    }

    /// Controls whether the generated script declares the named module.
    pub fn with_declare_module(mut self, declare: bool) -> Self {
        self.declare_module = declare;
        self
    }

    /// Strips a leading prefix from derived URLs.
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Prepends a prefix to derived URLs.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Rewrites each resolved URL through a hook.
    pub fn with_rename(
        mut self,
        f: impl Fn(&str, &PipelineFile) -> String + Send + Sync + 'static,
    ) -> Self {
        self.rename = Some(Box::new(f));
        self
    }

    /// Replaces the built-in templates with a custom one.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// True when a usable module name is configured.
    pub(crate) fn has_module_name(&self) -> bool {
        self.module_name.as_ref().is_some_and(ModuleName::is_set)
    }

    /// The template override, with an empty string counting as unset.
    pub(crate) fn template_override(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            module_name: None,
            declare_module: true,
            strip_prefix: None,
            prefix: None,
            rename: None,
            template: None,
        }
    }
}

impl fmt::Debug for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformOptions")
            .field("module_name", &self.module_name)
            .field("declare_module", &self.declare_module)
            .field("strip_prefix", &self.strip_prefix)
            .field("prefix", &self.prefix)
            .field("rename", &self.rename.as_ref().map(|_| ".."))
            .field("template", &self.template)
            .finish()
    }
}
