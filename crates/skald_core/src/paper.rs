//! Research paper metadata.

use serde::{Deserialize, Serialize};

/// Locally available metadata about a research paper.
///
/// Every field is optional: the fallback narrator has a generic default for
/// each one, so a completely empty `PaperMeta` still yields a usable story.
///
/// # Examples
///
/// ```
/// use skald_core::PaperMeta;
///
/// let meta = PaperMeta::builder()
///     .organism("Mus musculus")
///     .mission("ISS Expedition 64")
///     .build()
///     .unwrap();
/// assert_eq!(meta.organism().as_deref(), Some("Mus musculus"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
#[serde(default)]
pub struct PaperMeta {
    /// Paper title
    title: Option<String>,
    /// Subject area (e.g. "Astrobiology", "Microbiology")
    subject: Option<String>,
    /// Organism under study
    organism: Option<String>,
    /// Mission or flight context (e.g. "ISS", "STS-135")
    mission: Option<String>,
    /// Instrumentation or hardware used
    instrument: Option<String>,
    /// Observed outcome, one line
    outcome: Option<String>,
    /// Paper abstract
    abstract_text: Option<String>,
    /// DOI identifier
    doi: Option<String>,
    /// Orbit altitude in kilometers, when the experiment flew
    orbit_alt_km: Option<f64>,
    /// Orbit inclination in degrees
    inclination_deg: Option<f64>,
}

impl PaperMeta {
    /// Builder for assembling metadata field by field.
    pub fn builder() -> PaperMetaBuilder {
        PaperMetaBuilder::default()
    }
}
