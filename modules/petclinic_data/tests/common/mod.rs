//! Common test utilities and shared clinic fixtures

#![allow(dead_code)]

use chrono::NaiveDate;
use petclinic_data::{Config, Owner, Pet, PetClinicData, Visit};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory database with the schema applied
pub async fn setup() -> PetClinicData {
    init_tracing();
    PetClinicData::init(&Config::in_memory())
        .await
        .expect("in-memory data layer should start")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Two owners: Jean Coleman with two pets, George Franklin with one
#[derive(Debug, Clone)]
pub struct TestClinic {
    pub jean: Owner,
    pub george: Owner,
    pub samantha: Pet,
    pub max: Pet,
    pub leo: Pet,
}

impl TestClinic {
    pub fn new() -> Self {
        let jean = Owner::new(Uuid::new_v4(), "Jean", "Coleman");
        let george = Owner::new(Uuid::new_v4(), "George", "Franklin");

        Self {
            samantha: Pet::new(jean.id, "Samantha", date(2012, 9, 4), "cat"),
            max: Pet::new(jean.id, "Max", date(2012, 9, 4), "cat"),
            leo: Pet::new(george.id, "Leo", date(2010, 9, 7), "cat"),
            jean,
            george,
        }
    }

    pub fn pets(&self) -> Vec<Pet> {
        vec![self.samantha.clone(), self.max.clone(), self.leo.clone()]
    }

    /// Visits as recorded in the sample clinic data
    pub fn visits(&self) -> Vec<Visit> {
        vec![
            Visit::new(self.samantha.id, date(2013, 1, 1), "rabies shot"),
            Visit::new(self.max.id, date(2013, 1, 2), "rabies shot"),
            Visit::new(self.max.id, date(2013, 1, 3), "neutered"),
            Visit::new(self.samantha.id, date(2013, 1, 4), "spayed"),
        ]
    }
}

impl Default for TestClinic {
    fn default() -> Self {
        Self::new()
    }
}
