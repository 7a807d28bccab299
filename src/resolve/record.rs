//! The generic resolver and its output.

use super::schema::{
    ContentSchema,
    FieldSpec,
};
use crate::assets::resolver::{
    ImageResolver,
    ImageSource,
};
use crate::i18n::translator::Translator;
use crate::types::RecordId;

/// An image field after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageValue {
    /// The reference as written in the data file.
    pub reference: String,
    /// `None` when the reference matched nothing.
    pub resolved: Option<ImageSource>,
}

impl ImageValue {
    /// The resolved source, or the raw reference when unresolved.
    #[must_use]
    pub fn src_or_reference(&self) -> String {
        self.resolved.as_ref().map_or_else(|| self.reference.clone(), ImageSource::src)
    }
}

/// One resolved agenda row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    /// Start time.
    pub time: String,
    /// Translated activity.
    pub activity: String,
}

/// A display-ready field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Translated or passed-through text.
    Text(String),
    /// Translated list entries.
    TextList(Vec<String>),
    /// A resolved image.
    Image(ImageValue),
    /// Resolved gallery images.
    Gallery(Vec<ImageValue>),
    /// A number.
    Count(u32),
    /// Resolved agenda rows.
    Agenda(Vec<AgendaEntry>),
    /// An optional field the record does not have.
    Absent,
}

/// A content record with every localized and image field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Id of the source record.
    pub id: RecordId,
    /// Category of the source record.
    pub category: &'static str,
    /// Resolved fields in declared order.
    fields: Vec<(&'static str, DisplayValue)>,
}

impl DisplayRecord {
    /// Value of the field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DisplayValue> {
        self.fields.iter().find(|(field, _)| *field == name).map(|(_, value)| value)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &DisplayValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Text of a field, `None` when absent or not text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            DisplayValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text of a field, empty when absent.
    #[must_use]
    pub fn text_or_empty(&self, name: &str) -> &str {
        self.text(name).unwrap_or_default()
    }

    /// Entries of a list field, empty when absent.
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Some(DisplayValue::TextList(items)) => items,
            _ => &[],
        }
    }

    /// Image of a field, `None` when absent.
    #[must_use]
    pub fn image(&self, name: &str) -> Option<&ImageValue> {
        match self.get(name)? {
            DisplayValue::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Images of a gallery field, empty when absent.
    #[must_use]
    pub fn gallery(&self, name: &str) -> &[ImageValue] {
        match self.get(name) {
            Some(DisplayValue::Gallery(images)) => images,
            _ => &[],
        }
    }

    /// Number of a count field.
    #[must_use]
    pub fn count(&self, name: &str) -> Option<u32> {
        match self.get(name)? {
            DisplayValue::Count(count) => Some(*count),
            _ => None,
        }
    }

    /// Rows of an agenda field, empty when absent.
    #[must_use]
    pub fn agenda(&self, name: &str) -> &[AgendaEntry] {
        match self.get(name) {
            Some(DisplayValue::Agenda(entries)) => entries,
            _ => &[],
        }
    }
}

/// Resolves every declared field of `record`.
///
/// Localized fields go through `translator`, image fields through `images`,
/// everything else passes through. Missing optional fields become
/// [`DisplayValue::Absent`].
#[must_use]
pub fn resolve_record<R: ContentSchema>(
    record: &R,
    translator: &Translator<'_>,
    images: &ImageResolver<'_>,
) -> DisplayRecord {
    let fields = record
        .fields()
        .into_iter()
        .map(|(name, spec)| (name, resolve_field(spec, translator, images)))
        .collect();

    DisplayRecord { id: record.id(), category: R::CATEGORY, fields }
}

/// Resolves a slice of records, preserving order.
#[must_use]
pub fn resolve_all<R: ContentSchema>(
    records: &[R],
    translator: &Translator<'_>,
    images: &ImageResolver<'_>,
) -> Vec<DisplayRecord> {
    records.iter().map(|record| resolve_record(record, translator, images)).collect()
}

/// Resolves one declared field.
fn resolve_field(
    spec: FieldSpec<'_>,
    translator: &Translator<'_>,
    images: &ImageResolver<'_>,
) -> DisplayValue {
    let image = |reference: &str| ImageValue {
        reference: reference.to_string(),
        resolved: images.resolve(reference),
    };

    match spec {
        FieldSpec::Localized(key) => DisplayValue::Text(translator.text(&key)),
        FieldSpec::OptionalLocalized(Some(key)) => DisplayValue::Text(translator.text(key)),
        FieldSpec::LocalizedList(Some(keys)) => {
            DisplayValue::TextList(keys.iter().map(|key| translator.text(key)).collect())
        }
        FieldSpec::Image(reference) | FieldSpec::OptionalImage(Some(reference)) => {
            DisplayValue::Image(image(reference))
        }
        FieldSpec::Gallery(Some(references)) => {
            DisplayValue::Gallery(references.iter().map(|reference| image(reference)).collect())
        }
        FieldSpec::Text(text) | FieldSpec::OptionalText(Some(text)) => {
            DisplayValue::Text(text.to_string())
        }
        FieldSpec::Count(Some(count)) => DisplayValue::Count(count),
        FieldSpec::Agenda(Some(items)) => DisplayValue::Agenda(
            items
                .iter()
                .map(|item| AgendaEntry {
                    time: item.time.clone(),
                    activity: translator.text(&item.activity_key),
                })
                .collect(),
        ),
        FieldSpec::OptionalLocalized(None)
        | FieldSpec::LocalizedList(None)
        | FieldSpec::OptionalImage(None)
        | FieldSpec::Gallery(None)
        | FieldSpec::OptionalText(None)
        | FieldSpec::Count(None)
        | FieldSpec::Agenda(None) => DisplayValue::Absent,
    }
}
