//! Text direction and the `lang`/`dir` attributes of the rendering root.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::html::escape_attr;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Direction for a raw locale code. Unrecognized codes are left-to-right.
    pub fn for_code(code: &str) -> Self {
        Locale::from_code(code)
            .map(Locale::direction)
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something carrying document-level attributes (`<html lang dir>`).
pub trait RenderRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Set `lang` to the raw locale code and `dir` to its text direction.
pub fn apply_locale_attributes<R: RenderRoot + ?Sized>(root: &mut R, locale_code: &str) {
    root.set_attribute("lang", locale_code);
    root.set_attribute("dir", Direction::for_code(locale_code).as_str());
}

/// Applies locale attributes once per locale change.
///
/// One instance per page (or per response when rendering server-side).
#[derive(Debug, Default)]
pub struct LocaleAttributes {
    applied: Option<String>,
}

impl LocaleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `locale_code` to `root` if it differs from the last applied
    /// locale. Returns whether the root was touched.
    pub fn sync<R: RenderRoot + ?Sized>(&mut self, root: &mut R, locale_code: &str) -> bool {
        if self.applied.as_deref() == Some(locale_code) {
            return false;
        }
        apply_locale_attributes(root, locale_code);
        self.applied = Some(locale_code.to_string());
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.applied.as_deref()
    }
}

/// Server-side render root: the attributes of the response's `<html>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Opening `<html>` tag with attributes in name order.
    pub fn open_tag(&self) -> String {
        let mut tag = String::from("<html");
        for (name, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(name);
            tag.push_str("=\"");
            tag.push_str(&escape_attr(value));
            tag.push('"');
        }
        tag.push('>');
        tag
    }
}

impl RenderRoot for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
