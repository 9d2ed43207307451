//! Deterministic offline fallback narrative.

use crate::ImageRequestBuilder;
use skald_core::{PaperMeta, Scene, Story, StoryRequest};
use tracing::debug;

/// Fixed role titles of the five fallback scenes, in narrative order.
pub const FALLBACK_SCENE_TITLES: [&str; 5] =
    ["Background", "Objective", "Methods", "Results", "Implications"];

/// Synthesize a five-part story from locally available paper metadata.
///
/// Total function: every template branch has a generic default for a missing
/// field, so this never fails and performs no I/O. Scene texts carry their
/// role title as a `"Title: text"` prefix, and `full_text` is those texts
/// joined by blank lines.
pub fn fallback_story(
    request: &StoryRequest,
    meta: &PaperMeta,
    images: &ImageRequestBuilder,
) -> Story {
    let subject = meta
        .subject()
        .as_deref()
        .or(request.subject())
        .unwrap_or("space bioscience");

    let background = meta
        .abstract_text()
        .clone()
        .or_else(|| meta.outcome().clone())
        .unwrap_or_else(|| {
            let mission = meta
                .mission()
                .as_deref()
                .map(|m| format!(" on {m}"))
                .unwrap_or_default();
            format!("This study explores {subject}{mission}.")
        });

    let objective = format!(
        "Understand how {} respond in {} conditions.",
        meta.organism().as_deref().unwrap_or("organisms"),
        meta.mission().as_deref().unwrap_or("microgravity / spaceflight"),
    );

    let methods = match meta.instrument().as_deref() {
        Some(instrument) => {
            let altitude = meta
                .orbit_alt_km()
                .map(|km| format!(" at ~{km} km"))
                .unwrap_or_default();
            let inclination = meta
                .inclination_deg()
                .map(|deg| format!(", inclination ~{deg}\u{b0}"))
                .unwrap_or_default();
            format!("Experiments were conducted using {instrument}{altitude}{inclination}.")
        }
        None => "Standard space-bio lab procedures were applied.".to_string(),
    };

    let results = meta
        .outcome()
        .clone()
        .unwrap_or_else(|| "Key physiological and phenotypic changes were observed.".to_string());

    let implications = format!(
        "Findings inform future {} research and mission design{}.",
        meta.subject()
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "space biology".to_string()),
        meta.doi()
            .as_deref()
            .map(|doi| format!(" (DOI: {doi})"))
            .unwrap_or_default(),
    );

    let bodies = [background, objective, methods, results, implications];
    let scenes: Vec<Scene> = FALLBACK_SCENE_TITLES
        .iter()
        .zip(bodies)
        .enumerate()
        .map(|(i, (title, body))| {
            let part = (i + 1) as u32;
            let text = format!("{title}: {body}");
            let image_url = images.scene_url(part, subject, &text);
            Scene::new(part, text).with_image_url(image_url)
        })
        .collect();

    let full_text = scenes
        .iter()
        .map(|scene| scene.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let title = meta
        .title()
        .as_deref()
        .or(request.subject())
        .unwrap_or(subject)
        .to_string();

    debug!(scenes = scenes.len(), %title, "built fallback story");
    Story {
        title,
        full_text,
        scenes,
        is_fallback: true,
    }
}
