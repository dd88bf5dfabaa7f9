//! Typed field binding from environment-style key/value sources.
//!
//! Records declare per-field bindings (`"KEY"` or `"KEY,allow-empty"`);
//! [`bind`](bind()) resolves each key against a [`KeySource`], coerces the
//! raw string to the field's declared type, and reports exactly which
//! binding failed and why. An optional dotenv-format override file can be
//! layered over the base source via [`Binder`].

mod bind;
mod coerce;
mod error;
mod overrides;
mod record;
mod source;

pub use bind::{bind, Binder, LOAD_DOTFILE_VAR};
pub use error::{BindError, CoerceCause};
pub use record::{Field, Record, Slot};
pub use source::{EnvSource, KeySource, MapSource};
