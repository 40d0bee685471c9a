//! Responsive srcset expansion
//!
//! Turns one logical request into the multi-URL candidate list expected by the
//! `srcset` attribute of an HTML `<img>` tag. The shape of the size parameters
//! decides the expansion axis:
//!
//! - a `width` list or range expands along width (`Nw` descriptors);
//! - a fixed `width` or `height` expands along device pixel ratio
//!   (`Nx` descriptors), using the supplied `dpr` list/range or the default
//!   ladder `1..6`;
//! - with no size at all, the default 16-step geometric width ladder from 100
//!   to 8192 is used.
//!
//! Width, height and quality ranges expand geometrically; a dpr range instead
//! enumerates every integer in it.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::params::{Params, Value};
use crate::sequence::{sequence, DEFAULT_SIZE};
use crate::source::Source;
use crate::url;

/// Default dpr ladder used when expanding by dpr without an explicit list.
pub const DEFAULT_DPRS: [i64; 6] = [1, 2, 3, 4, 5, 6];

/// Bounds of the default width ladder, expanded geometrically to
/// [`DEFAULT_SIZE`] candidates.
pub const DEFAULT_WIDTH_BOUNDS: (i64, i64) = (100, 8192);

/// The trailing srcset descriptor of one candidate: `Nw` or `Nx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    Width(i64),
    Dpr(i64),
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Width(w) => write!(f, "{}w", w),
            Descriptor::Dpr(d) => write!(f, "{}x", d),
        }
    }
}

/// One expanded srcset member: a fully scalar parameter set plus the
/// descriptor it renders with.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub params: Params,
    pub descriptor: Descriptor,
}

/// Renders the full srcset attribute value: every candidate URL followed by
/// its descriptor, joined with `",\n"`.
pub fn render(source: &Source, path: &str, params: &Params) -> Result<String> {
    let candidates = expand(params)?;

    let mut lines = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        let url = url::build(source, path, &candidate.params)?;
        lines.push(format!("{} {}", url, candidate.descriptor));
    }
    Ok(lines.join(",\n"))
}

/// Expands a parameter set into ordered srcset candidates.
///
/// Errors when the parameter shapes contradict each other: a dpr list/range
/// next to a width list/range, a height list/range without one for width, or
/// a dpr list/range with no width or height at all.
pub fn expand(params: &Params) -> Result<Vec<Candidate>> {
    let params = normalize(params);

    let candidates = if is_dynamic(params.get("width")) {
        if is_dynamic(params.get("dpr")) {
            return Err(Error::InvalidParams(
                "dpr as a list or range is not allowed when width is a list or range".to_string(),
            ));
        }
        debug!(axis = "width", "expanding srcset");
        expand_width(&params)
    } else if is_present(params.get("width")) || is_present(params.get("height")) {
        if is_dynamic(params.get("height")) {
            return Err(Error::InvalidParams(
                "height as a list or range is not allowed when width is not one too".to_string(),
            ));
        }
        let dprs = match params.get("dpr") {
            Some(value) if value.is_expandable() => value.clone(),
            _ => Value::List(DEFAULT_DPRS.to_vec()),
        };
        let mut merged = params.clone();
        merged.set("dpr", dprs);
        debug!(axis = "dpr", "expanding srcset");
        expand_dpr(&merged)
    } else {
        if is_dynamic(params.get("dpr")) {
            return Err(Error::InvalidParams(
                "dpr as a list or range is not allowed without a width or height".to_string(),
            ));
        }
        let mut merged = params.clone();
        let (first, last) = DEFAULT_WIDTH_BOUNDS;
        merged.set("width", Value::Range(first, last));
        debug!(axis = "width", default_ladder = true, "expanding srcset");
        expand_width(&merged)
    };

    Ok(candidates)
}

/// Dasherizes keys and drops `width`/`dpr` entries whose value is an empty
/// list, so they fall through to the defaults. An empty `height` or `quality`
/// list is kept and degrades to a bare key on every candidate.
fn normalize(params: &Params) -> Params {
    let mut normalized = params.dasherized();
    for key in ["width", "dpr"] {
        if matches!(normalized.get(key), Some(Value::List(values)) if values.is_empty()) {
            normalized.remove(key);
        }
    }
    normalized
}

/// A value is dynamic when it expands into multiple candidates.
fn is_dynamic(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_expandable)
}

/// A key counts as present for the axis decision only when it carries an
/// actual value; an explicitly empty value behaves like an absent size.
fn is_present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if *v != Value::Empty)
}

fn expand_width(params: &Params) -> Vec<Candidate> {
    let widths = match params.get("width") {
        Some(Value::List(values)) => values.clone(),
        Some(Value::Range(first, last)) => sequence(*first, *last, DEFAULT_SIZE as i64),
        _ => Vec::new(),
    };
    let count = widths.len();
    let heights = positional_values(params.get("height"), count);
    let qualities = positional_values(params.get("quality"), count);

    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let mut candidate = params.clone();
            candidate.set("width", Value::Int(width));
            overlay(&mut candidate, "height", &heights, i);
            overlay(&mut candidate, "quality", &qualities, i);
            Candidate {
                params: candidate,
                descriptor: Descriptor::Width(width),
            }
        })
        .collect()
}

fn expand_dpr(params: &Params) -> Vec<Candidate> {
    // dpr ranges enumerate literally, never geometrically
    let dprs: Vec<i64> = match params.get("dpr") {
        Some(Value::List(values)) => values.clone(),
        Some(Value::Range(first, last)) => (*first..=*last).collect(),
        _ => Vec::new(),
    };
    let count = dprs.len();
    let qualities = positional_values(params.get("quality"), count);

    dprs.iter()
        .enumerate()
        .map(|(i, &dpr)| {
            let mut candidate = params.clone();
            candidate.set("dpr", Value::Int(dpr));
            overlay(&mut candidate, "quality", &qualities, i);
            Candidate {
                params: candidate,
                descriptor: Descriptor::Dpr(dpr),
            }
        })
        .collect()
}

/// Per-candidate values for a secondary key, or `None` when the key keeps its
/// static value (or stays absent) on every candidate.
///
/// A range expands geometrically over its own bounds; a list is used
/// positionally, with positions past its end degrading to [`Value::Empty`]
/// (a bare key) rather than dropping the key.
fn positional_values(value: Option<&Value>, count: usize) -> Option<Vec<Value>> {
    match value {
        Some(Value::List(values)) => Some(
            (0..count)
                .map(|i| values.get(i).map(|&v| Value::Int(v)).unwrap_or(Value::Empty))
                .collect(),
        ),
        Some(Value::Range(first, last)) => Some(
            sequence(*first, *last, count as i64)
                .into_iter()
                .map(Value::Int)
                .collect(),
        ),
        _ => None,
    }
}

fn overlay(candidate: &mut Params, key: &str, values: &Option<Vec<Value>>, index: usize) {
    if let Some(values) = values {
        candidate.set(key, values[index].clone());
    }
}
