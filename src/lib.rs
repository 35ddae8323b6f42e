pub mod diagnostics;
pub mod file;
pub mod loader;
pub mod parser;
pub mod process_env;
pub mod value;

pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, StdoutSink, TracingSink};
pub use loader::{apply, EnvLoader, DEFAULT_ENV_FILE, DEFAULT_MODE_KEY};
pub use parser::{parse_env, EnvMap};
pub use process_env::{MapEnv, ProcessEnv, StdEnv};
pub use value::EnvValue;
