use std::path::{Path, PathBuf};

use tracing::trace;

use crate::coerce::assign;
use crate::error::BindError;
use crate::overrides::Overlay;
use crate::record::{parse_declaration, Record};
use crate::source::{EnvSource, KeySource};

/// Environment toggle suppressing override-file loading.
///
/// When the base key source resolves this key to `"disable"`, the override
/// file is not loaded even if the binder asks for it.
pub const LOAD_DOTFILE_VAR: &str = "ENVBIND_LOAD_DOTFILE";

const DISABLE_SENTINEL: &str = "disable";
const DEFAULT_OVERRIDE_FILE: &str = ".env";

/// Binds record fields from a key source, with optional file-based overrides.
///
/// Fields are processed in declaration order and binding stops at the first
/// failure. Fields bound before the failure may already be mutated; callers
/// needing atomicity should bind into a scratch record and copy on success.
///
/// ## Example
///
/// ```no_run
/// use envbind::{Binder, EnvSource};
///
/// #[derive(Debug, Default)]
/// struct DbConfig {
///     host: String,
///     port: u16,
/// }
///
/// envbind::record! {
///     DbConfig {
///         host: String => "DB_HOST",
///         port: u16 => "DB_PORT,allow-empty",
///     }
/// }
///
/// let mut config = DbConfig::default();
/// Binder::new()
///     .with_override_file()
///     .bind(&mut config, &EnvSource)?;
/// # Ok::<(), envbind::BindError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use = "a Binder does nothing until .bind() is called"]
pub struct Binder {
    use_override_file: bool,
    override_file: PathBuf,
}

impl Binder {
    /// Creates a binder with overrides disabled and the file name `.env`.
    pub fn new() -> Self {
        Self {
            use_override_file: false,
            override_file: PathBuf::from(DEFAULT_OVERRIDE_FILE),
        }
    }

    /// Loads the override file before any field lookups.
    ///
    /// Values from the file take precedence over the base source for keys
    /// present in the file. A file that cannot be read or parsed fails the
    /// whole bind before any field is touched.
    pub fn with_override_file(mut self) -> Self {
        self.use_override_file = true;
        self
    }

    /// Changes the override file path.
    ///
    /// Only consulted once override loading is enabled with
    /// [`with_override_file`](Self::with_override_file).
    pub fn with_override_file_name(mut self, path: impl AsRef<Path>) -> Self {
        self.override_file = path.as_ref().to_path_buf();
        self
    }

    /// Populates `record`'s bound fields from `source`.
    pub fn bind<R, S>(&self, record: &mut R, source: &S) -> Result<(), BindError>
    where
        R: Record,
        S: KeySource + ?Sized,
    {
        if self.use_override_file && source.get(LOAD_DOTFILE_VAR) != DISABLE_SENTINEL {
            let overlaid = Overlay::load(&self.override_file, source)?;
            walk(record, &overlaid)
        } else {
            walk(record, source)
        }
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds `record` from the process environment with default options.
pub fn bind<R: Record>(record: &mut R) -> Result<(), BindError> {
    Binder::new().bind(record, &EnvSource)
}

fn walk<R, S>(record: &mut R, source: &S) -> Result<(), BindError>
where
    R: Record,
    S: KeySource + ?Sized,
{
    for field in record.fields() {
        let Some(declaration) = field.binding else {
            continue;
        };

        let decl = parse_declaration(declaration);
        let value = source.get(decl.key);

        if value.is_empty() {
            if decl.allow_empty {
                trace!("key '{}' unset, field '{}' left unchanged", decl.key, field.name);
                continue;
            }
            return Err(BindError::MissingKey { key: decl.key });
        }

        assign(field.name, decl.key, field.slot, &value)?;
    }

    Ok(())
}
