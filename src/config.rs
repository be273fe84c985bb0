/// How deeply function applications may nest before evaluation is abandoned.
pub const DEFAULT_RECURSION_LIMIT: usize = 128;

/// Prompt printed before each line in interactive mode.
pub const DEFAULT_PROMPT: &str = "mint|> ";

/// Interpreter settings.
///
/// A `Config` is handed to [`Context::with_config`] once per session; the
/// command-line driver fills it from its arguments.
///
/// [`Context::with_config`]: crate::interpreter::evaluator::core::Context::with_config
///
/// # Example
/// ```
/// use mint::config::{Config, DEFAULT_RECURSION_LIMIT};
///
/// let config = Config { recursion_limit: 8,
///                       ..Config::default() };
/// assert_eq!(config.recursion_limit, 8);
/// assert_ne!(config.recursion_limit, DEFAULT_RECURSION_LIMIT);
/// assert!(!config.show_environment);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested applications.
    pub recursion_limit:  usize,
    /// Print the environment after every evaluated line.
    pub show_environment: bool,
    /// Interactive prompt.
    pub prompt:           String,
}

impl Default for Config {
    fn default() -> Self {
        Self { recursion_limit:  DEFAULT_RECURSION_LIMIT,
               show_environment: false,
               prompt:           DEFAULT_PROMPT.to_string(), }
    }
}
