// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline `style` attribute handling.
//!
//! Only a handful of presentational properties survive into a fragment. The
//! filter keeps the relative order of the surviving declarations and writes
//! property names in lower case, so filtering already-filtered styles is a
//! no-op.

/// CSS properties allowed on fragment elements.
pub const ALLOWED_STYLE_PROPERTIES: [&str; 6] = [
    "font-weight",
    "font-style",
    "text-decoration",
    "text-align",
    "margin-left",
    "padding-left",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.trim().to_ascii_lowercase(),
            value: value.trim().to_owned(),
        }
    }
}

pub fn is_allowed_property(property: &str) -> bool {
    let property = property.trim();
    ALLOWED_STYLE_PROPERTIES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(property))
}

/// Split a style attribute into declarations. Declarations without a `:`,
/// without a property name or without a value are skipped.
pub fn parse_declarations(style: &str) -> Vec<StyleDeclaration> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let declaration = StyleDeclaration::new(property, value);
            if declaration.property.is_empty() || declaration.value.is_empty()
            {
                None
            } else {
                Some(declaration)
            }
        })
        .collect()
}

pub fn serialize_declarations(declarations: &[StyleDeclaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {}", d.property, d.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Drop every declaration whose property is not allowed.
pub fn filter_style(style: &str) -> String {
    let kept: Vec<StyleDeclaration> = parse_declarations(style)
        .into_iter()
        .filter(|d| is_allowed_property(&d.property))
        .collect();
    serialize_declarations(&kept)
}

/// Layer `overrides` on top of `existing`. Declarations of `existing` whose
/// property is overridden are dropped, the rest keep their order and come
/// first. No property is filtered.
pub fn merge_style(existing: &str, overrides: &str) -> String {
    let overrides = parse_declarations(overrides);
    let mut merged: Vec<StyleDeclaration> = parse_declarations(existing)
        .into_iter()
        .filter(|d| !overrides.iter().any(|o| o.property == d.property))
        .collect();
    merged.extend(overrides);
    serialize_declarations(&merged)
}

/// The value of the last declaration of `property`, if any.
pub fn style_value(style: &str, property: &str) -> Option<String> {
    parse_declarations(style)
        .into_iter()
        .rev()
        .find(|d| d.property.eq_ignore_ascii_case(property))
        .map(|d| d.value)
}

/// Parse a length such as `40px` or `2.5px` into whole pixels. Units other
/// than `px` (and unit-less zero) are not understood.
pub fn parse_px(value: &str) -> Option<u32> {
    let value = value.trim();
    if value == "0" {
        return Some(0);
    }
    let number = value.strip_suffix("px")?.trim();
    let px: f32 = number.parse().ok()?;
    if px.is_finite() && px >= 0.0 {
        Some(px.round() as u32)
    } else {
        None
    }
}
