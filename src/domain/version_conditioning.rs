//! Convention-specific template variants.
//!
//! Templates carry both the legacy and the current form of version-sensitive
//! exports side by side. Conditioning keeps one form per axis, deletes the
//! other and renames the survivor to its canonical export name. The whole
//! behavior is described by the transform table below; adding an axis means
//! adding a marker and its rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ConventionFlags;

/// Independent version axis a template can vary on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionAxis {
    Meta,
    ErrorBoundary,
}

impl ConventionAxis {
    pub const ALL: [ConventionAxis; 2] = [ConventionAxis::Meta, ConventionAxis::ErrorBoundary];

    fn is_v2(self, flags: ConventionFlags) -> bool {
        match self {
            ConventionAxis::Meta => flags.v2_meta,
            ConventionAxis::ErrorBoundary => flags.v2_error_boundary,
        }
    }
}

/// One textual rewrite applied when `axis` resolves to the given version.
#[derive(Debug)]
struct VariantTransform {
    axis: ConventionAxis,
    v2: bool,
    pattern: Regex,
    replacement: &'static str,
}

/// Marker proving a template still holds the legacy form of an axis.
///
/// Axes without their legacy marker are left alone, so conditioning an
/// already-conditioned template is a no-op.
#[derive(Debug)]
struct AxisMarker {
    axis: ConventionAxis,
    legacy: Regex,
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid variant pattern {pattern:?}: {err}"))
}

fn remove(axis: ConventionAxis, v2: bool, pattern: &str) -> VariantTransform {
    VariantTransform { axis, v2, pattern: regex(pattern), replacement: "" }
}

fn rename(
    axis: ConventionAxis,
    v2: bool,
    pattern: &str,
    replacement: &'static str,
) -> VariantTransform {
    VariantTransform { axis, v2, pattern: regex(pattern), replacement }
}

static VARIANT_TRANSFORMS: LazyLock<Vec<VariantTransform>> = LazyLock::new(|| {
    use ConventionAxis::{ErrorBoundary, Meta};
    vec![
        // meta, current form kept
        remove(Meta, true, r"\btype MetaFunction\b\s*,?"),
        remove(Meta, true, r"(?s)export const metaV1:.+?\n};\n?"),
        // meta, legacy form kept
        remove(Meta, false, r"\btype V2_MetaFunction\b\s*,?"),
        remove(Meta, false, r"(?s)export const meta:.+?\n};\n?"),
        rename(Meta, false, r"const metaV1:", "const meta:"),
        // error boundary, current form kept
        remove(ErrorBoundary, true, r"\btype ErrorBoundaryComponent\b\s*,?"),
        remove(ErrorBoundary, true, r"\buseCatch\b\s*,?"),
        remove(ErrorBoundary, true, r"(?s)export function CatchBoundary.+?\n}\n?"),
        remove(ErrorBoundary, true, r"(?s)export const ErrorBoundaryV1.+?\n};\n?"),
        // error boundary, legacy form kept
        remove(ErrorBoundary, false, r"\buseRouteError\b\s*,?"),
        remove(ErrorBoundary, false, r"\bisRouteErrorResponse\b\s*,?"),
        remove(ErrorBoundary, false, r"(?s)export function ErrorBoundary\b.+?\n}\n?"),
        rename(ErrorBoundary, false, r"const ErrorBoundaryV1:", "const ErrorBoundary:"),
    ]
});

static AXIS_MARKERS: LazyLock<Vec<AxisMarker>> = LazyLock::new(|| {
    vec![
        AxisMarker { axis: ConventionAxis::Meta, legacy: regex(r"\bconst metaV1\s*:") },
        AxisMarker {
            axis: ConventionAxis::ErrorBoundary,
            legacy: regex(r"\bconst ErrorBoundaryV1\s*:|\bfunction CatchBoundary\b"),
        },
    ]
});

/// Import statements emptied by variant removal.
static EMPTY_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    regex(r#"(?m)^import\s*(?:type\s*)?\{\s*\}\s*from\s*['"][^'"]+['"];?[ \t]*\n?"#)
});

/// Whether the template still carries the legacy variant of `axis`.
pub fn has_legacy_variant(template: &str, axis: ConventionAxis) -> bool {
    AXIS_MARKERS.iter().any(|marker| marker.axis == axis && marker.legacy.is_match(template))
}

/// Keep the variant of every axis selected by `flags`.
///
/// Returns a new string; the input is never modified.
pub fn condition_template(template: &str, flags: ConventionFlags) -> String {
    let mut output = template.to_string();
    let mut touched = false;

    for axis in ConventionAxis::ALL {
        if !has_legacy_variant(&output, axis) {
            continue;
        }
        let v2 = axis.is_v2(flags);
        for transform in VARIANT_TRANSFORMS.iter().filter(|t| t.axis == axis && t.v2 == v2) {
            output = transform.pattern.replacen(&output, 1, transform.replacement).into_owned();
        }
        touched = true;
    }

    if touched {
        output = EMPTY_IMPORT.replace_all(&output, "").into_owned();
    }
    output
}
