// src/domain/property.rs

use crate::domain::{price_per_area, InvalidAreaError};
use serde::Serialize;

/// A mock property listing. Nothing here is persisted or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: u32,
    pub address: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    /// Not validated on construction; see [`PropertyRecord::price_per_sqft`].
    pub sqft: u32,
}

impl PropertyRecord {
    pub fn new(id: u32, address: &str, price: u64, bedrooms: u32, bathrooms: f64, sqft: u32) -> Self {
        Self {
            id,
            address: address.to_string(),
            price,
            bedrooms,
            bathrooms,
            sqft,
        }
    }

    pub fn price_per_sqft(&self) -> Result<f64, InvalidAreaError> {
        price_per_area(self.price as f64, self.sqft as f64)
    }
}

/// Optional bounds; `None` leaves that dimension unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<f64>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.min_price.map_or(true, |min| record.price >= min)
            && self.max_price.map_or(true, |max| record.price <= max)
            && self.min_bedrooms.map_or(true, |min| record.bedrooms >= min)
            && self.min_bathrooms.map_or(true, |min| record.bathrooms >= min)
    }
}

/// Keeps records that satisfy every bound in `criteria`, in input order.
pub fn filter_properties(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Listings shown in the on-page search demo.
pub fn demo_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord::new(1, "123 Main St", 350000, 3, 2.0, 1800),
        PropertyRecord::new(2, "456 Elm St", 425000, 4, 3.0, 2200),
        PropertyRecord::new(3, "789 Oak St", 550000, 5, 4.0, 2800),
        PropertyRecord::new(4, "101 Pine St", 300000, 2, 2.0, 1500),
        PropertyRecord::new(5, "202 Cedar St", 475000, 4, 3.0, 2400),
    ]
}

/// Listings served by the paginated JSON API.
pub fn listing_catalog() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord::new(1, "123 Main St", 350000, 3, 2.0, 1800),
        PropertyRecord::new(2, "456 Elm St", 425000, 4, 3.0, 2200),
        PropertyRecord::new(3, "789 Oak St", 550000, 5, 4.0, 2800),
        PropertyRecord::new(4, "101 Pine St", 600000, 6, 4.0, 3400),
        PropertyRecord::new(5, "222 Maple St", 700000, 4, 3.0, 3100),
        PropertyRecord::new(6, "333 Birch St", 475000, 3, 2.0, 2000),
        PropertyRecord::new(7, "444 Cherry St", 525000, 4, 3.0, 2500),
        PropertyRecord::new(8, "555 Walnut St", 650000, 5, 4.0, 3000),
        PropertyRecord::new(9, "666 Willow St", 380000, 3, 2.0, 1700),
        PropertyRecord::new(10, "777 Poplar St", 450000, 4, 3.0, 2300),
    ]
}
