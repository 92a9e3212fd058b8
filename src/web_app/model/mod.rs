// web_app/model/mod.rs - Catalog data models
//
// These structs mirror the catalog API's JSON and the local form state of
// the product manager.

use serde::{Deserialize, Serialize};

/// Splits a comma-separated tag string into trimmed tags.
///
/// Empty segments are kept, so `""` becomes `[""]` and `"a,"` becomes
/// `["a", ""]`.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Renders tags back into the comma-separated form used by text inputs.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Product as returned by the catalog API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Data URI or plain URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Replaces the tags from a comma-separated edit field.
    pub fn set_tags_from_text(&mut self, raw: &str) {
        self.tags = normalize_tags(raw);
    }

    pub fn tags_text(&self) -> String {
        join_tags(&self.tags)
    }
}

/// Product being composed in the "add" form
///
/// Tags stay a single text field until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: String,
}

impl DraftProduct {
    /// Builds the creation payload, splitting and trimming the tags.
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: normalize_tags(&self.tags),
        }
    }
}

/// Creation payload (`POST` body)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

/// Success banner shown after a mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessNotice {
    Added,
    Updated,
}

impl SuccessNotice {
    pub fn heading(&self) -> &'static str {
        match self {
            SuccessNotice::Added => "Product Added!",
            SuccessNotice::Updated => "Product Updated!",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            SuccessNotice::Added => "A new product has been successfully added.",
            SuccessNotice::Updated => "The product has been successfully updated.",
        }
    }
}

impl std::fmt::Display for SuccessNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading())
    }
}

/// Which form a chosen image file belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageTarget {
    Draft,    // "Add product" form
    Selection, // Edit modal
}

impl std::fmt::Display for ImageTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageTarget::Draft => write!(f, "draft"),
            ImageTarget::Selection => write!(f, "selection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags_trims_each_segment() {
        assert_eq!(normalize_tags("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_tags_keeps_empty_segments() {
        assert_eq!(normalize_tags(""), vec![""]);
        assert_eq!(normalize_tags("shoes,"), vec!["shoes", ""]);
        assert_eq!(normalize_tags(" , "), vec!["", ""]);
    }

    #[test]
    fn test_normalize_tags_single_tag() {
        assert_eq!(normalize_tags("  leather  "), vec!["leather"]);
    }

    #[test]
    fn test_join_tags() {
        let tags = vec!["red".to_string(), "wool".to_string()];
        assert_eq!(join_tags(&tags), "red, wool");
        assert_eq!(join_tags(&[]), "");
    }

    #[test]
    fn test_tags_text_survives_edit_cycle() {
        let mut product = Product {
            id: "p1".to_string(),
            title: "Scarf".to_string(),
            tags: vec!["red".to_string(), "wool".to_string()],
            ..Default::default()
        };

        let text = product.tags_text();
        product.set_tags_from_text(&text);
        assert_eq!(product.tags, vec!["red", "wool"]);

        product.set_tags_from_text("red, wool, winter");
        assert_eq!(product.tags, vec!["red", "wool", "winter"]);
    }

    #[test]
    fn test_draft_to_new_product() {
        let draft = DraftProduct {
            title: "Boots".to_string(),
            description: "Hiking boots".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
            tags: "outdoor , leather".to_string(),
        };

        let payload = draft.to_new_product();
        assert_eq!(payload.title, "Boots");
        assert_eq!(payload.description, "Hiking boots");
        assert_eq!(payload.image, "data:image/png;base64,AAAA");
        assert_eq!(payload.tags, vec!["outdoor", "leather"]);
    }

    #[test]
    fn test_new_product_serializes_tags_as_array() {
        let payload = DraftProduct {
            tags: "a,b".to_string(),
            ..Default::default()
        }
        .to_new_product();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(json["title"], "");
    }

    #[test]
    fn test_product_deserializes_underscore_id() {
        let json = r#"{"_id":"65f1","title":"Lamp","description":"Desk lamp","image":"https://cdn/lamp.png","tags":["home"]}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "65f1");
        assert_eq!(product.title, "Lamp");
        assert_eq!(product.tags, vec!["home"]);
    }

    #[test]
    fn test_product_missing_optional_fields_default() {
        let json = r#"{"_id":"x","title":"Bare"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.tags.is_empty());
        assert!(product.description.is_empty());
        assert!(product.image.is_empty());
    }

    #[test]
    fn test_product_serializes_underscore_id() {
        let product = Product {
            id: "abc".to_string(),
            title: "Mug".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["_id"], "abc");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_success_notice_texts() {
        assert_eq!(SuccessNotice::Added.heading(), "Product Added!");
        assert_eq!(SuccessNotice::Updated.heading(), "Product Updated!");
        assert!(SuccessNotice::Added.detail().contains("added"));
        assert!(SuccessNotice::Updated.detail().contains("updated"));
        assert_eq!(SuccessNotice::Updated.to_string(), "Product Updated!");
    }

    #[test]
    fn test_image_target_display() {
        assert_eq!(ImageTarget::Draft.to_string(), "draft");
        assert_eq!(ImageTarget::Selection.to_string(), "selection");
    }
}
