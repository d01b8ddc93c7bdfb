//! Built-in starter catalog
//!
//! Written to disk the first time a store is opened with no catalog file
//! present; after that the stored collection lives on its own.

use carlot_types::Car;

fn seed_car(
    id: &str,
    make: &str,
    model: &str,
    year: i32,
    price: u64,
    description: &str,
    image_url: &str,
    features: &[&str],
) -> Car {
    Car {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        price,
        description: description.to_string(),
        image_url: image_url.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        sold: false,
        buyer_id: None,
    }
}

/// The six-car starter catalog, all listings available
pub fn seed_catalog() -> Vec<Car> {
    vec![
        seed_car(
            "1",
            "Toyota",
            "Camry",
            2021,
            25000,
            "Reliable sedan with excellent fuel economy and smooth ride. Includes advanced safety features and infotainment system.",
            "https://images.unsplash.com/photo-1553440569-bcc63803a83d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["Bluetooth", "Backup Camera", "Lane Assist", "Cruise Control"],
        ),
        seed_car(
            "2",
            "Honda",
            "Civic",
            2022,
            22000,
            "Compact car with sporty handling and modern styling. Features include Honda Sensing safety suite and Apple CarPlay/Android Auto.",
            "https://images.unsplash.com/photo-1533106418989-88406c7cc8ca?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["Apple CarPlay", "Android Auto", "Sunroof", "Heated Seats"],
        ),
        seed_car(
            "3",
            "Ford",
            "Mustang",
            2020,
            35000,
            "Iconic American muscle car with powerful engine options. Features SYNC infotainment and performance driving modes.",
            "https://images.unsplash.com/photo-1584345604476-8ec5e12e42dd?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["V8 Engine", "Leather Seats", "Premium Audio", "Rear-Wheel Drive"],
        ),
        seed_car(
            "4",
            "Jeep",
            "Wrangler",
            2021,
            40000,
            "Off-road capable SUV with removable top and doors. Includes 4x4 capability and modern tech features.",
            "https://images.unsplash.com/photo-1561893836-adae6b766f82?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["4x4", "Removable Top", "Off-Road Package", "Tow Package"],
        ),
        seed_car(
            "5",
            "Tesla",
            "Model 3",
            2022,
            45000,
            "All-electric sedan with impressive range and acceleration. Features include Autopilot and large touchscreen interface.",
            "https://images.unsplash.com/photo-1561580125-028ee3bd62eb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["Electric", "Autopilot", "Minimalist Interior", "Fast Charging"],
        ),
        seed_car(
            "6",
            "BMW",
            "3 Series",
            2021,
            42000,
            "Luxury sedan with dynamic handling and premium features. Includes iDrive infotainment and driver assistance features.",
            "https://images.unsplash.com/photo-1520050206274-a1ae44613e6d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            &["Leather Interior", "Navigation", "Sport Mode", "Premium Sound"],
        ),
    ]
}
