//! Startup-time variant probing.
//!
//! The resolver needs to know, once per process or per object construction,
//! which implementation variant to bind. Real deployments detect this from
//! hardware; this crate models that boundary as a [`VariantProbe`] trait
//! with an environment-override probe for testing and bare-metal setups,
//! plus [`bind`], which maps a probe report onto the resolver's declared
//! variants and fails fast when the build does not carry the reported one.

use aperture_registry::{ResolveError, Resolver, VariantBinding};
use thiserror::Error;

/// Environment variable consulted by [`EnvProbe::new`].
pub const VARIANT_ENV: &str = "APERTURE_VARIANT";

/// What a probe detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
	/// Name of the detected implementation variant.
	pub variant: String,
}

/// Detects which implementation variant the process should bind.
pub trait VariantProbe {
	/// Runs the detection. Called once during initialization.
	fn report(&self) -> ProbeReport;
}

/// A fixed report, for tests and embedders that negotiated elsewhere.
#[derive(Debug, Clone)]
pub struct StaticProbe {
	variant: String,
}

impl StaticProbe {
	/// Creates a probe that always reports the given variant.
	pub fn new(variant: impl Into<String>) -> Self {
		Self {
			variant: variant.into(),
		}
	}
}

impl VariantProbe for StaticProbe {
	fn report(&self) -> ProbeReport {
		ProbeReport {
			variant: self.variant.clone(),
		}
	}
}

/// Reads the variant from the environment, falling back to a default.
///
/// The override takes precedence over the configured default, mirroring how
/// detection overrides work on platforms where probing is unavailable or
/// under test harnesses pinning a variant.
#[derive(Debug, Clone)]
pub struct EnvProbe {
	var: String,
	default: String,
}

impl EnvProbe {
	/// Creates a probe reading [`VARIANT_ENV`] with the given default.
	pub fn new(default: impl Into<String>) -> Self {
		Self::with_var(VARIANT_ENV, default)
	}

	/// Creates a probe reading a custom environment variable.
	pub fn with_var(var: impl Into<String>, default: impl Into<String>) -> Self {
		Self {
			var: var.into(),
			default: default.into(),
		}
	}
}

impl VariantProbe for EnvProbe {
	fn report(&self) -> ProbeReport {
		let variant = std::env::var(&self.var)
			.ok()
			.filter(|v| !v.is_empty())
			.unwrap_or_else(|| self.default.clone());
		ProbeReport { variant }
	}
}

/// A probe reported a variant this build cannot serve.
///
/// This is the one non-routine failure in the dispatch subsystem: it means
/// the deployed build does not match the runtime hardware or configuration.
/// Propagate it out of initialization; do not fall back to generic dispatch.
#[derive(Error, Debug)]
pub enum ProbeError {
	#[error("hardware probe reported an unusable variant: {0}")]
	UnknownVariant(#[from] ResolveError),
}

/// Runs a probe and binds its reported variant.
pub fn bind<F: Clone>(
	resolver: &Resolver<F>,
	probe: &dyn VariantProbe,
) -> Result<VariantBinding, ProbeError> {
	let report = probe.report();
	match resolver.bind_by_name(&report.variant) {
		Ok(binding) => {
			tracing::debug!(variant = %report.variant, "bound implementation variant");
			Ok(binding)
		}
		Err(err) => {
			tracing::error!(
				variant = %report.variant,
				%err,
				"probe reported a variant this build does not carry"
			);
			Err(ProbeError::UnknownVariant(err))
		}
	}
}
