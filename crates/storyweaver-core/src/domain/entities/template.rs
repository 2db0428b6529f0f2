//! Story templates and placeholder substitution.
//!
//! ## Template Anatomy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StoryTemplate                                              │
//! │  ├── title: "The Quest for the {object}"                    │
//! │  └── body:  "In the land of {place}, {name} and ..."        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateVariant::Plain                                     │
//! │  └── "{title}\n\n{body}"                                    │
//! │  TemplateVariant::Display                                   │
//! │  └── "{icon} **{title}**\n\n{body}"                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both variants are assembled from the same title and body, so a display
//! rendering and a plain rendering of the same template and field values can
//! only ever differ in the icon and the emphasis markers around the title.
//!
//! ## Placeholder Syntax
//!
//! `{key}` where `key` is one of the [`Field`] keys. `{{` and `}}` produce a
//! literal brace. Anything else inside braces is a validation error, caught
//! when the template enters a store rather than at render time.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::fields::FieldValues,
    error::DomainError,
    value_objects::{Field, Genre},
};

/// Decorative markers that wrap the title in display text.
pub const EMPHASIS_MARKERS: [&str; 2] = ["**", "__"];

/// Which rendering of a template to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Icon and emphasis markup, for on-screen display.
    Display,
    /// Markup-free, for export.
    Plain,
}

/// A narrative template owned by one genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryTemplate {
    title: Cow<'static, str>,
    body: Cow<'static, str>,
}

impl StoryTemplate {
    /// Create a template. Call [`StoryTemplate::validate`] before rendering.
    pub fn new(title: impl Into<Cow<'static, str>>, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check that title and body are non-empty and every placeholder is known.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.title.to_string(),
            });
        }
        parse(&self.title, &self.title)?;
        parse(&self.body, &self.title)?;
        Ok(())
    }

    /// Distinct fields referenced by this template, in order of first use.
    pub fn placeholders(&self) -> Result<Vec<Field>, DomainError> {
        let mut fields = Vec::new();
        for source in [self.title.as_ref(), self.body.as_ref()] {
            for segment in parse(source, &self.title)? {
                if let Segment::Placeholder(field) = segment {
                    if !fields.contains(&field) {
                        fields.push(field);
                    }
                }
            }
        }
        Ok(fields)
    }

    /// Substitute `values` into the requested variant.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingField`] for the first placeholder without a value.
    pub fn render(
        &self,
        genre: Genre,
        variant: TemplateVariant,
        values: &FieldValues,
    ) -> Result<String, DomainError> {
        let title = substitute(&self.title, &self.title, values)?;
        let body = substitute(&self.body, &self.title, values)?;

        Ok(match variant {
            TemplateVariant::Plain => format!("{title}\n\n{body}"),
            TemplateVariant::Display => format!("{} **{title}**\n\n{body}", genre.icon()),
        })
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(Field),
}

/// Split `source` into literal text and placeholders.
///
/// Only ASCII braces are inspected, so byte offsets always fall on char
/// boundaries.
fn parse<'a>(source: &'a str, template: &str) -> Result<Vec<Segment<'a>>, DomainError> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    let unbalanced = |position| DomainError::UnbalancedBrace {
        template: template.to_string(),
        position,
    };

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                push_text(&mut segments, &source[literal_start..i]);
                segments.push(Segment::Text(&source[i..=i]));
                i += 2;
                literal_start = i;
            }
            b'{' => {
                let close = source[i + 1..]
                    .find(['{', '}'])
                    .map(|offset| i + 1 + offset)
                    .filter(|&close| bytes[close] == b'}')
                    .ok_or_else(|| unbalanced(i))?;

                let name = &source[i + 1..close];
                let field =
                    Field::from_key(name).ok_or_else(|| DomainError::UnknownPlaceholder {
                        template: template.to_string(),
                        name: name.to_string(),
                    })?;

                push_text(&mut segments, &source[literal_start..i]);
                segments.push(Segment::Placeholder(field));
                i = close + 1;
                literal_start = i;
            }
            b'}' => return Err(unbalanced(i)),
            _ => i += 1,
        }
    }

    push_text(&mut segments, &source[literal_start..]);
    Ok(segments)
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

fn substitute(source: &str, template: &str, values: &FieldValues) -> Result<String, DomainError> {
    let mut out = String::with_capacity(source.len() + 32);
    for segment in parse(source, template)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(field) => {
                let value = values
                    .value(field)
                    .ok_or(DomainError::MissingField { field })?;
                out.push_str(&value);
            }
        }
    }
    Ok(out)
}

/// Remove paired emphasis markers such as `**bold**` and `__bold__`.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MagicNumber;

    fn values() -> FieldValues {
        FieldValues::new()
            .name("Alex")
            .animal("dragon")
            .place("Avalon")
            .object("crystal orb")
            .emotion("excitement")
            .superpower("shapeshifting")
            .number(MagicNumber::default())
    }

    #[test]
    fn plain_variant_has_no_markup() {
        let t = StoryTemplate::new("The {object}", "{name} went to {place}.");
        let out = t
            .render(Genre::Fantasy, TemplateVariant::Plain, &values())
            .unwrap();
        assert_eq!(out, "The crystal orb\n\nAlex went to Avalon.");
    }

    #[test]
    fn display_variant_adds_icon_and_bold_title() {
        let t = StoryTemplate::new("The {object}", "{name} went to {place}.");
        let out = t
            .render(Genre::Fantasy, TemplateVariant::Display, &values())
            .unwrap();
        assert_eq!(out, "\u{1f3f0} **The crystal orb**\n\nAlex went to Avalon.");
    }

    #[test]
    fn number_substitutes_as_decimal() {
        let t = StoryTemplate::new("T", "{number} clues");
        let out = t
            .render(Genre::Mystery, TemplateVariant::Plain, &values())
            .unwrap();
        assert!(out.ends_with("7 clues"));
    }

    #[test]
    fn doubled_braces_are_literal() {
        let t = StoryTemplate::new("T", "{{name}} is {name}");
        assert!(t.validate().is_ok());
        let out = t
            .render(Genre::Comedy, TemplateVariant::Plain, &values())
            .unwrap();
        assert!(out.ends_with("{name} is Alex"));
    }

    #[test]
    fn missing_value_names_the_field() {
        let t = StoryTemplate::new("T", "{name} felt {emotion}");
        let partial = FieldValues::new().name("Alex");
        let err = t
            .render(Genre::Adventure, TemplateVariant::Plain, &partial)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingField {
                field: Field::Emotion
            }
        );
    }

    #[test]
    fn substituted_values_are_not_reexpanded() {
        let t = StoryTemplate::new("T", "{name}");
        let tricky = values().name("{place}");
        let out = t
            .render(Genre::Adventure, TemplateVariant::Plain, &tricky)
            .unwrap();
        assert!(out.ends_with("{place}"));
    }

    #[test]
    fn unknown_placeholder_rejected() {
        let t = StoryTemplate::new("T", "{villain} struck");
        assert!(matches!(
            t.validate(),
            Err(DomainError::UnknownPlaceholder { name, .. }) if name == "villain"
        ));
    }

    #[test]
    fn unbalanced_braces_rejected() {
        for body in ["open {name", "close name}", "nested {na{me}"] {
            let t = StoryTemplate::new("T", body);
            assert!(
                matches!(t.validate(), Err(DomainError::UnbalancedBrace { .. })),
                "accepted: {body}"
            );
        }
    }

    #[test]
    fn empty_template_rejected() {
        let t = StoryTemplate::new("  ", "body");
        assert!(matches!(
            t.validate(),
            Err(DomainError::EmptyTemplate { .. })
        ));
    }

    #[test]
    fn placeholders_are_distinct_and_ordered() {
        let t = StoryTemplate::new("The {object}", "{name} and {object} in {place}");
        assert_eq!(
            t.placeholders().unwrap(),
            vec![Field::Object, Field::Name, Field::Place]
        );
    }

    #[test]
    fn non_ascii_text_survives_parsing() {
        let t = StoryTemplate::new("Café {object}", "Ünïcödé {name} ✨");
        let out = t
            .render(Genre::Fantasy, TemplateVariant::Plain, &values())
            .unwrap();
        assert_eq!(out, "Café crystal orb\n\nÜnïcödé Alex ✨");
    }

    #[test]
    fn strip_emphasis_removes_both_marker_kinds() {
        assert_eq!(strip_emphasis("**bold** and __also__"), "bold and also");
    }
}
