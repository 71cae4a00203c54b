//! Built-in EV model catalogue used to auto-fill battery capacity.
//!
//! Usable capacities in kWh; trims matter because the same model ships with
//! very different packs.

pub struct EvModel {
    pub id: &'static str,
    pub make: &'static str,
    pub model: &'static str,
    pub trim: Option<&'static str>,
    pub capacity: f64,
}

pub const EV_CATALOG: &[EvModel] = &[
    // Tesla
    EvModel { id: "tesla-m3-rwd", make: "Tesla", model: "Model 3", trim: Some("RWD (LFP)"), capacity: 57.5 },
    EvModel { id: "tesla-m3-lr", make: "Tesla", model: "Model 3", trim: Some("Long Range / Perf"), capacity: 75.0 },
    EvModel { id: "tesla-my-rwd", make: "Tesla", model: "Model Y", trim: Some("RWD"), capacity: 60.0 },
    EvModel { id: "tesla-my-lr", make: "Tesla", model: "Model Y", trim: Some("Long Range / Perf"), capacity: 75.0 },
    EvModel { id: "tesla-ms-lr", make: "Tesla", model: "Model S", trim: Some("Long Range"), capacity: 100.0 },
    EvModel { id: "tesla-mx-lr", make: "Tesla", model: "Model X", trim: Some("Long Range"), capacity: 100.0 },
    EvModel { id: "tesla-ct", make: "Tesla", model: "Cybertruck", trim: Some("AWD"), capacity: 123.0 },
    // Hyundai / Kia
    EvModel { id: "hyundai-ioniq5-lr", make: "Hyundai", model: "Ioniq 5", trim: Some("Long Range"), capacity: 77.4 },
    EvModel { id: "hyundai-ioniq5-sr", make: "Hyundai", model: "Ioniq 5", trim: Some("Standard Range"), capacity: 58.0 },
    EvModel { id: "hyundai-ioniq6-lr", make: "Hyundai", model: "Ioniq 6", trim: Some("Long Range"), capacity: 77.4 },
    EvModel { id: "kia-ev6-lr", make: "Kia", model: "EV6", trim: Some("Long Range"), capacity: 77.4 },
    EvModel { id: "kia-ev9-lr", make: "Kia", model: "EV9", trim: Some("Long Range"), capacity: 99.8 },
    // Ford
    EvModel { id: "ford-mache-ext", make: "Ford", model: "Mustang Mach-E", trim: Some("Extended Range"), capacity: 91.0 },
    EvModel { id: "ford-mache-std", make: "Ford", model: "Mustang Mach-E", trim: Some("Standard Range"), capacity: 72.0 },
    EvModel { id: "ford-f150-ext", make: "Ford", model: "F-150 Lightning", trim: Some("Extended Range"), capacity: 131.0 },
    EvModel { id: "ford-f150-std", make: "Ford", model: "F-150 Lightning", trim: Some("Standard Range"), capacity: 98.0 },
    // Nissan
    EvModel { id: "nissan-leaf-40", make: "Nissan", model: "Leaf", trim: Some("40 kWh"), capacity: 40.0 },
    EvModel { id: "nissan-leaf-62", make: "Nissan", model: "Leaf e+", trim: Some("62 kWh"), capacity: 62.0 },
    EvModel { id: "nissan-ariya-87", make: "Nissan", model: "Ariya", trim: Some("87 kWh"), capacity: 87.0 },
    // VW / Audi / Porsche
    EvModel { id: "vw-id4-pro", make: "Volkswagen", model: "ID.4", trim: Some("Pro"), capacity: 82.0 },
    EvModel { id: "vw-id4-std", make: "Volkswagen", model: "ID.4", trim: Some("Standard"), capacity: 62.0 },
    EvModel { id: "audi-etron-gt", make: "Audi", model: "e-tron GT", trim: None, capacity: 93.4 },
    EvModel { id: "porsche-taycan-perf", make: "Porsche", model: "Taycan", trim: Some("Perf Battery Plus"), capacity: 93.4 },
    // Rivian
    EvModel { id: "rivian-r1t-large", make: "Rivian", model: "R1T", trim: Some("Large Pack"), capacity: 135.0 },
    EvModel { id: "rivian-r1s-large", make: "Rivian", model: "R1S", trim: Some("Large Pack"), capacity: 135.0 },
    // Chevrolet
    EvModel { id: "chevy-bolt", make: "Chevrolet", model: "Bolt EV/EUV", trim: None, capacity: 66.0 },
    EvModel { id: "chevy-blazer", make: "Chevrolet", model: "Blazer EV", trim: Some("RS AWD"), capacity: 85.0 },
    // BMW
    EvModel { id: "bmw-i4-e40", make: "BMW", model: "i4", trim: Some("eDrive40"), capacity: 80.7 },
    EvModel { id: "bmw-ix-50", make: "BMW", model: "iX", trim: Some("xDrive50"), capacity: 105.2 },
];

pub fn find(id: &str) -> Option<&'static EvModel> {
    EV_CATALOG.iter().find(|ev| ev.id == id)
}
