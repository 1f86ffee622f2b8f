//! Bundle models.

use crate::query::Params;

/// Changes to a bundle for `bundle_edit`.
///
/// As with [`LinkEdit`](crate::LinkEdit), the supplied field names become the
/// `edit` parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
    pub preview: Option<bool>,
    pub og_image: Option<String>,
}

impl BundleEdit {
    /// Names of the supplied fields, in wire order.
    pub fn edited_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_some()),
            ("description", self.description.is_some()),
            ("private", self.private.is_some()),
            ("preview", self.preview.is_some()),
            ("og_image", self.og_image.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.edited_fields().is_empty()
    }

    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("title", self.title.as_deref());
        params.insert_opt("description", self.description.as_deref());
        params.insert_opt("private", self.private);
        params.insert_opt("preview", self.preview);
        params.insert_opt("og_image", self.og_image.as_deref());
        params.insert("edit", self.edited_fields().join(","));
    }
}

/// New bundle settings for `bundle_create`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBundle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
}

impl NewBundle {
    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("title", self.title.as_deref());
        params.insert_opt("description", self.description.as_deref());
        params.insert_opt("private", self.private);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode;

    #[test]
    fn test_bundle_edit_derives_edit_param() {
        let edit = BundleEdit {
            description: Some("Reading list".into()),
            preview: Some(true),
            ..Default::default()
        };
        let mut params = Params::new().with("bundle_link", "http://bitly.com/bundles/me/1");
        edit.apply(&mut params);
        assert_eq!(params.get("edit").and_then(|v| v.as_str()), Some("description,preview"));
        assert!(!params.contains_key("title"));
    }

    #[test]
    fn test_empty_edit() {
        assert!(BundleEdit::default().is_empty());
    }
}
