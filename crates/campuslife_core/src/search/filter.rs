//! Substring filter over record search fields.

use std::borrow::Cow;

/// Records that expose a fixed set of text fields to search.
pub trait Searchable {
    /// Fields joined with a single space to form the match haystack.
    fn searchable_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Keeps the records whose joined fields contain `term`, ignoring case.
///
/// A blank `term` returns `records` unchanged. Relative order is preserved.
pub fn filter_by<R, F>(records: Vec<R>, term: &str, fields_of: F) -> Vec<R>
where
    F: Fn(&R) -> Vec<Cow<'_, str>>,
{
    if term.trim().is_empty() {
        return records;
    }

    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| haystack(&fields_of(record)).contains(needle.as_str()))
        .collect()
}

/// [`filter_by`] using the record's own [`Searchable`] fields.
pub fn filter_records<R: Searchable>(records: Vec<R>, term: &str) -> Vec<R> {
    filter_by(records, term, R::searchable_fields)
}

fn haystack(fields: &[Cow<'_, str>]) -> String {
    fields.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{filter_by, filter_records, Searchable};
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, &'static str);

    impl Searchable for Item {
        fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.0), Cow::Borrowed(self.1)]
        }
    }

    #[test]
    fn term_may_span_field_boundary() {
        let items = vec![Item("Quiet", "Room"), Item("Loud", "Hall")];
        let kept = filter_records(items, "quiet room");
        assert_eq!(kept, vec![Item("Quiet", "Room")]);
    }

    #[test]
    fn whitespace_only_term_is_identity() {
        let items = vec![Item("a", "b"), Item("c", "d")];
        assert_eq!(filter_records(items.clone(), "   "), items);
    }

    #[test]
    fn custom_field_projection_is_honored() {
        let items = vec![Item("alpha", "beta"), Item("gamma", "alpha")];
        let kept = filter_by(items, "ALPHA", |item| vec![Cow::Borrowed(item.0)]);
        assert_eq!(kept, vec![Item("alpha", "beta")]);
    }

    #[test]
    fn match_ignores_case_inside_words() {
        let items = vec![Item("Makerspace", "Lab"), Item("Studio", "C3")];
        assert_eq!(
            filter_records(items, "SPACE"),
            vec![Item("Makerspace", "Lab")]
        );
    }
}
