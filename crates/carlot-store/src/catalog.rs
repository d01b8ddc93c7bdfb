//! File-backed catalog store
//!
//! The whole catalog lives in one JSON slot (`cars.json`) as an ordered
//! array; every mutation is a full read-modify-write of that slot. There is
//! no compare-and-swap, so concurrent writers race and the last write wins
//! at whole-collection granularity. That trade-off is deliberate: the store
//! serves a single local session.

use carlot_domain::notify::{Notifier, SilentNotifier};
use carlot_domain::repository::CatalogRepository;
use carlot_types::{Car, Error, NewCar, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::seed::seed_catalog;

/// Persistent store owning the catalog slot
pub struct CatalogStore {
    catalog_path: PathBuf,
    notifier: Box<dyn Notifier>,
}

impl CatalogStore {
    /// Create or open a catalog store under the given directory
    ///
    /// Seeds the slot with the built-in starter catalog when no catalog
    /// file exists yet; an existing file is left as-is.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let catalog_path = store_dir.join("cars.json");

        let store = Self {
            catalog_path,
            notifier: Box::new(SilentNotifier),
        };

        if !store.catalog_path.exists() {
            store.save(&seed_catalog())?;
        }

        Ok(store)
    }

    /// Route outcome notifications to the given sink
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Path of the catalog slot
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Number of records in the catalog, sold or not
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    fn load(&self) -> Result<Vec<Car>> {
        let file = File::open(&self.catalog_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, cars: &[Car]) -> Result<()> {
        let file = File::create(&self.catalog_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, cars)?;
        Ok(())
    }
}

impl CatalogRepository for CatalogStore {
    fn find_all(&self) -> Result<Vec<Car>> {
        self.load()
    }

    fn find_available(&self) -> Result<Vec<Car>> {
        Ok(self.load()?.into_iter().filter(Car::is_available).collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Car>> {
        Ok(self.load()?.into_iter().find(|car| car.id == id))
    }

    fn find_purchased_by(&self, buyer_id: &str) -> Result<Vec<Car>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|car| car.sold && car.buyer_id.as_deref() == Some(buyer_id))
            .collect())
    }

    fn purchase(&self, car_id: &str, buyer_id: &str) -> Result<bool> {
        let mut cars = self.load()?;

        let car = match cars.iter_mut().find(|car| car.id == car_id) {
            Some(car) if !car.sold => car,
            _ => {
                self.notifier.error("Car is not available for purchase!");
                return Ok(false);
            }
        };

        car.sold = true;
        car.buyer_id = Some(buyer_id.to_string());
        self.save(&cars)?;
        self.notifier.success("Car purchased successfully!");
        Ok(true)
    }

    fn add(&self, new_car: NewCar) -> Result<Car> {
        let mut cars = self.load()?;
        let car = new_car.into_car(uuid::Uuid::new_v4().to_string());

        cars.push(car.clone());
        self.save(&cars)?;
        self.notifier.success("Car added successfully!");
        Ok(car)
    }

    fn update(&self, car: Car) -> Result<bool> {
        if car.sold != car.buyer_id.is_some() {
            self.notifier.error("Car record is inconsistent!");
            return Err(Error::InconsistentRecord(car.id));
        }

        let mut cars = self.load()?;

        let slot = match cars.iter_mut().find(|c| c.id == car.id) {
            Some(slot) => slot,
            None => {
                self.notifier.error("Car not found!");
                return Ok(false);
            }
        };

        *slot = car;
        self.save(&cars)?;
        self.notifier.success("Car updated successfully!");
        Ok(true)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut cars = self.load()?;
        let initial_len = cars.len();
        cars.retain(|car| car.id != id);

        if cars.len() == initial_len {
            self.notifier.error("Car not found!");
            return Ok(false);
        }

        self.save(&cars)?;
        self.notifier.success("Car deleted successfully!");
        Ok(true)
    }
}
