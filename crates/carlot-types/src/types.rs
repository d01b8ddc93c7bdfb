//! Vehicle listing records
//!
//! `Car` keeps the catalog's historical wire shape: camelCase keys, and the
//! buyer's id stored under the legacy `sellerId` key.

use serde::{Deserialize, Serialize};

/// A vehicle listing in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier, assigned by the store on creation
    pub id: String,
    /// Manufacturer (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Camry")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Asking price, currency-agnostic integer amount
    pub price: u64,
    /// Free-text description
    pub description: String,
    /// Listing image URL (not validated)
    pub image_url: String,
    /// Feature tags, in display order
    pub features: Vec<String>,
    /// Whether the car has been purchased
    pub sold: bool,
    /// Buyer's id once sold; the serialized key is a legacy misnomer
    #[serde(default, rename = "sellerId")]
    pub buyer_id: Option<String>,
}

impl Car {
    /// A car is available while it has not been sold
    pub fn is_available(&self) -> bool {
        !self.sold
    }
}

/// A listing draft: everything the seller provides, before the store
/// assigns an id. New listings always start out unsold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: u64,
    pub description: String,
    pub image_url: String,
    pub features: Vec<String>,
}

impl NewCar {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32, price: u64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            price,
            description: String::new(),
            image_url: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Turn the draft into an available catalog record under the given id
    pub fn into_car(self, id: String) -> Car {
        Car {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            features: self.features,
            sold: false,
            buyer_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_wire_shape() {
        let car = NewCar::new("Toyota", "Camry", 2021, 25000)
            .with_image_url("https://example.com/camry.jpg")
            .into_car("1".to_string());

        let json = serde_json::to_value(&car).unwrap();
        // Legacy keys must survive: camelCase, and the buyer id under "sellerId"
        assert_eq!(json["imageUrl"], "https://example.com/camry.jpg");
        assert!(json["sellerId"].is_null());
        assert_eq!(json["sold"], false);
    }

    #[test]
    fn test_draft_starts_available() {
        let car = NewCar::new("Honda", "Civic", 2022, 22000)
            .with_description("Compact car")
            .with_features(vec!["Sunroof".to_string()])
            .into_car("abc".to_string());

        assert!(car.is_available());
        assert_eq!(car.buyer_id, None);
        assert_eq!(car.features, vec!["Sunroof"]);
    }
}
