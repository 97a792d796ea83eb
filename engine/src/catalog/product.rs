use serde::{Deserialize, Serialize};

/// Image shown when a product has no usable image URI.
pub const PLACEHOLDER_IMAGE: &str = "https://images.pexels.com/photos/4465124/pexels-photo-4465124.jpeg?auto=compress&cs=tinysrgb&w=400&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Percentage off, 0 meaning none.
    #[serde(default)]
    pub discount: u32,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }

    /// Price as shown on cards, e.g. `$19.99` or `$10`.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }

    pub fn discount_label(&self) -> Option<String> {
        self.has_discount().then(|| format!("{}% OFF", self.discount))
    }

    pub fn image_or_placeholder(&self) -> &str {
        let image = self.image.trim();
        if image.starts_with("http://") || image.starts_with("https://") {
            image
        } else {
            PLACEHOLDER_IMAGE
        }
    }

    pub fn display_category(&self) -> String {
        display_category(&self.category)
    }
}

/// Capitalise each word of a category label (`men's clothing` -> `Men's Clothing`).
pub fn display_category(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(image: &str, discount: u32, price: f64) -> Product {
        Product {
            id: 1,
            title: "Lamp".to_string(),
            price,
            description: "Desk lamp".to_string(),
            category: "home goods".to_string(),
            image: image.to_string(),
            discount,
        }
    }

    #[test]
    fn test_display_helpers() {
        let lamp = product("https://cdn.example.com/lamp.png", 15, 19.99);
        assert!(lamp.has_discount());
        assert_eq!(lamp.display_price(), "$19.99");
        assert_eq!(lamp.discount_label().as_deref(), Some("15% OFF"));
        assert_eq!(lamp.image_or_placeholder(), "https://cdn.example.com/lamp.png");
        assert_eq!(lamp.display_category(), "Home Goods");

        let plain = product("", 0, 10.0);
        assert!(!plain.has_discount());
        assert_eq!(plain.discount_label(), None);
        assert_eq!(plain.display_price(), "$10");
        assert_eq!(plain.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_discount_defaults_to_none() {
        let json = r#"{"id": 7, "title": "Mug", "price": 4.5, "description": "Tea mug", "category": "kitchen"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.discount, 0);
        assert_eq!(product.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }
}
