//! Repository trait definitions for catalog persistence

use carlot_types::{Car, Error, NewCar};

/// Repository for the vehicle catalog
///
/// The catalog is one ordered collection; implementations must preserve
/// insertion order across mutations. "Not found" and "not available" are
/// ordinary `Ok(false)` / `Ok(None)` results, never errors - `Err` is
/// reserved for storage failures.
pub trait CatalogRepository {
    /// Every record, sold or not, in storage order
    fn find_all(&self) -> Result<Vec<Car>, Error>;

    /// Records still open for purchase
    fn find_available(&self) -> Result<Vec<Car>, Error>;

    /// Look up a single record by id
    fn find_by_id(&self, id: &str) -> Result<Option<Car>, Error>;

    /// Records bought by the given buyer
    fn find_purchased_by(&self, buyer_id: &str) -> Result<Vec<Car>, Error>;

    /// Mark a car as sold to the given buyer
    ///
    /// Returns `Ok(false)` if the car does not exist or is already sold;
    /// the catalog is left untouched in that case.
    fn purchase(&self, car_id: &str, buyer_id: &str) -> Result<bool, Error>;

    /// Append a new listing, assigning it a fresh id
    fn add(&self, new_car: NewCar) -> Result<Car, Error>;

    /// Replace the record with the same id, keeping its position
    ///
    /// Returns `Ok(false)` if no record with that id exists. Records whose
    /// sold flag and buyer id disagree are rejected with
    /// [`Error::InconsistentRecord`].
    fn update(&self, car: Car) -> Result<bool, Error>;

    /// Delete a record by id; `Ok(false)` if absent
    fn remove(&self, id: &str) -> Result<bool, Error>;
}
