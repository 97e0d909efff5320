//! Node-name to property-name conversion

/// Converts an element name into the property name it populates
pub trait NameConverter: Send + Sync {
    fn convert(&self, name: &str) -> String;
}

impl<F> NameConverter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert(&self, name: &str) -> String {
        self(name)
    }
}

/// Camel-cases names: `litres_per_hundred` and `LitresPerHundred` both
/// become `litresPerHundred`
///
/// Spaces, underscores and hyphens separate words. Each word's first letter
/// is upper-cased, separators are removed, and the first letter of the
/// result is lower-cased. Other letters keep their case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseConverter;

impl NameConverter for CamelCaseConverter {
    fn convert(&self, name: &str) -> String {
        let mut studly = String::with_capacity(name.len());
        let mut word_start = true;

        for ch in name.chars() {
            if matches!(ch, ' ' | '_' | '-') {
                word_start = true;
                continue;
            }
            if word_start {
                studly.extend(ch.to_uppercase());
                word_start = false;
            } else {
                studly.push(ch);
            }
        }

        let mut chars = studly.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Leaves names untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl NameConverter for IdentityConverter {
    fn convert(&self, name: &str) -> String {
        name.to_string()
    }
}
