/// What the host build tool tells the hook about the current invocation.
pub trait HookContext: Send + Sync {
    /// The raw command line the build tool was started with.
    fn command_line(&self) -> &str;
    /// Plugins currently installed in the project.
    fn installed_plugins(&self) -> &[String];
}

/// Context assembled from explicit values, used by the CLI and the node bridge.
#[derive(Debug, Clone, Default)]
pub struct StaticHookContext {
    command_line: String,
    installed_plugins: Vec<String>,
}

impl StaticHookContext {
    #[must_use]
    pub const fn new(command_line: String, installed_plugins: Vec<String>) -> Self {
        Self {
            command_line,
            installed_plugins,
        }
    }
}

impl HookContext for StaticHookContext {
    fn command_line(&self) -> &str {
        &self.command_line
    }

    fn installed_plugins(&self) -> &[String] {
        &self.installed_plugins
    }
}
