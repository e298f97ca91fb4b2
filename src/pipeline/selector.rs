//! Template selection.
//!
//! Selection accumulates candidates before narrowing them: the base table
//! is always a candidate, the inferred language's table is appended, and
//! only then is the union filtered by target type and kind. Caller-supplied
//! filters take precedence over the filter carried by the analysis result.

use std::path::Path;

use super::catalog::{self, PipelineTemplate, TargetKind, TargetType};
use super::language::{analyze_repository, AnalysisResult};
use crate::error::Result;

/// Classify the repository at `repo_path` and select matching templates.
pub fn select_templates(
    repo_path: &Path,
    target_type: Option<TargetType>,
    target_kind: Option<TargetKind>,
) -> Result<Vec<&'static PipelineTemplate>> {
    let analysis = analyze_repository(repo_path)?;
    Ok(templates_for_analysis(&analysis, target_type, target_kind))
}

/// Select templates for an already-computed analysis result.
///
/// Pure over the `const` catalog tables; no table is ever mutated.
pub fn templates_for_analysis(
    analysis: &AnalysisResult,
    target_type: Option<TargetType>,
    target_kind: Option<TargetKind>,
) -> Vec<&'static PipelineTemplate> {
    let mut templates: Vec<&'static PipelineTemplate> = Vec::new();
    templates.extend(catalog::BASE_TEMPLATES.iter());
    templates.extend(catalog::templates_for(analysis.language).iter());

    let target_type =
        target_type.or_else(|| analysis.target_filter.map(|filter| filter.target_type));
    let Some(target_type) = target_type else {
        return templates;
    };
    templates.retain(|template| template.filters.target_type == target_type);

    let target_kind =
        target_kind.or_else(|| analysis.target_filter.and_then(|filter| filter.target_kind));
    if let Some(kind) = target_kind {
        // No kind filter on a template means it matches any kind.
        templates.retain(|template| {
            template.filters.target_kind.is_none() || template.filters.target_kind == Some(kind)
        });
    }

    tracing::debug!(
        "{} template(s) selected for language {}",
        templates.len(),
        analysis.language
    );
    templates
}
