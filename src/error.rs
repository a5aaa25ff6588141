use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. Every variant aborts the run before any lint
/// results are produced; none are retried or accumulated.
#[derive(Debug, Error)]
pub enum Error {
    /// A positional argument does not match any recognized pattern shape.
    #[error("invalid input format \"{arg}\": specify a feature file, directory or glob")]
    InvalidInputFormat { arg: String },

    /// Neither an explicit nor a default configuration file is resolvable.
    #[error(
        "could not find {} config file \"{}\"{}",
        config_kind(.is_default),
        .path.display(),
        config_hint(.is_default)
    )]
    ConfigNotFound { path: PathBuf, is_default: bool },

    /// The configuration file is not a well-formed JSON object.
    #[error("failed to parse config file \"{}\": {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration key names a rule absent from the registry.
    #[error("rule \"{rule}\" does not exist")]
    UnknownRule { rule: String },

    /// A rule's configured value was rejected by that rule's own validator.
    /// The reason is the validator's message, passed through verbatim.
    #[error("invalid configuration for rule \"{rule}\": {reason}")]
    InvalidRuleConfig { rule: String, reason: String },

    /// The requested output format name is not recognized.
    #[error("unsupported format \"{format}\": the supported formats are stylish and json")]
    UnsupportedFormat { format: String },
}

fn config_kind(is_default: &bool) -> &'static str {
    if *is_default { "default" } else { "specified" }
}

fn config_hint(is_default: &bool) -> &'static str {
    if *is_default {
        " in the working directory; provide one with -c/--config"
    } else {
        ""
    }
}
