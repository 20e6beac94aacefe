//! Veterinary contacts and government schemes
//!
//! Static reference data shown on the dashboard. Vet entries are proper
//! names and are not translated; scheme copy lives in the locale tables
//! under `scheme.<id>.{title,description,benefits}`.

/// A veterinary clinic or hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub specialization: &'static str,
    pub emergency: bool,
}

impl VetContact {
    /// `tel:` link for the phone number.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// A government scheme for livestock farmers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Locale key segment, e.g. `rashtriyaGokulMission`.
    pub id: &'static str,
    pub website: &'static str,
    /// Highlighted whenever a breed has been identified.
    pub breed_relevant: bool,
}

impl Scheme {
    pub fn title_key(&self) -> String {
        format!("scheme.{}.title", self.id)
    }

    pub fn description_key(&self) -> String {
        format!("scheme.{}.description", self.id)
    }

    pub fn benefits_key(&self) -> String {
        format!("scheme.{}.benefits", self.id)
    }
}

const VETS: [VetContact; 4] = [
    VetContact {
        name: "Central Veterinary Hospital",
        phone: "+91-11-12345678",
        address: "Sector 15, Rohini, New Delhi",
        specialization: "Large Animal Care",
        emergency: true,
    },
    VetContact {
        name: "Gujarat Veterinary Clinic",
        phone: "+91-79-98765432",
        address: "Naroda Road, Ahmedabad, Gujarat",
        specialization: "Cattle Breeding",
        emergency: true,
    },
    VetContact {
        name: "Punjab Animal Hospital",
        phone: "+91-161-2345678",
        address: "Model Town, Ludhiana, Punjab",
        specialization: "Buffalo Care",
        emergency: true,
    },
    VetContact {
        name: "Maharashtra Vet Care",
        phone: "+91-20-87654321",
        address: "Shivaji Nagar, Pune, Maharashtra",
        specialization: "Dairy Health",
        emergency: false,
    },
];

const SCHEMES: [Scheme; 4] = [
    Scheme {
        id: "nationalLivestockMission",
        website: "https://dahd.nic.in",
        breed_relevant: false,
    },
    Scheme {
        id: "rashtriyaGokulMission",
        website: "https://dahd.nic.in",
        breed_relevant: true,
    },
    Scheme {
        id: "dairyEntrepreneurship",
        website: "https://www.nddb.coop",
        breed_relevant: false,
    },
    Scheme {
        id: "pashuKisanCreditCard",
        website: "https://www.nabard.org",
        breed_relevant: false,
    },
];

/// Read-only access to the bundled reference data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directory;

impl Directory {
    pub fn vets(&self) -> &'static [VetContact] {
        &VETS
    }

    pub fn schemes(&self) -> &'static [Scheme] {
        &SCHEMES
    }

    pub fn emergency_vets(&self) -> impl Iterator<Item = &'static VetContact> {
        VETS.iter().filter(|vet| vet.emergency)
    }
}
