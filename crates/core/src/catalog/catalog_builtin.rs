//! Embedded construction catalog (2025 Rupiah prices).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{AllocationProfile, Category, QuantityRule, UnitPrice};
use crate::projects::ProjectType;

const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "preparation",
        "Pekerjaan Persiapan",
        &[
            "Mobilisasi dan Demobilisasi",
            "Pagar Pengaman Proyek",
            "Kantor dan Gudang Sementara",
            "Papan Nama Proyek",
            "Bongkar Bangunan Lama",
            "Pembersihan Lahan",
            "Direksi Kit",
            "Pengukuran dan Pematokan",
        ],
    ),
    (
        "earthwork",
        "Pekerjaan Tanah",
        &[
            "Galian Tanah Pondasi",
            "Galian Tanah Saluran",
            "Timbunan Tanah Pilihan",
            "Pemadatan Tanah",
            "Urugan Pasir Bawah Pondasi",
            "Urugan Sirtu Jalan Kerja",
            "Dewatering/Pompa Air",
        ],
    ),
    (
        "foundation",
        "Pekerjaan Pondasi",
        &[
            "Pondasi Bore Pile D30cm",
            "Pondasi Bore Pile D40cm",
            "Pondasi Foot Plat",
            "Pile Cap",
            "Sloof Beton Bertulang",
            "Dinding Penahan Tanah",
            "Pondasi Batu Kali",
            "Waterproofing Pondasi",
        ],
    ),
    (
        "structure",
        "Pekerjaan Struktur",
        &[
            "Kolom Beton Bertulang",
            "Balok Beton Bertulang",
            "Pelat Lantai Beton",
            "Tangga Beton Bertulang",
            "Cor Lantai Kerja",
            "Dinding Geser/Shear Wall",
            "Struktur Baja",
            "Bekisting dan Perancah",
        ],
    ),
    (
        "architecture",
        "Pekerjaan Arsitektur",
        &[
            "Dinding Bata Merah",
            "Dinding Hebel/Bata Ringan",
            "Plesteran dan Acian",
            "Pengecatan Dinding",
            "Keramik Lantai 60x60",
            "Keramik Dinding 30x30",
            "Pintu dan Jendela",
            "Plafon Gypsum",
            "Atap Genteng Metal",
            "Partisi Toilet",
        ],
    ),
    (
        "mechanical",
        "Pekerjaan Mekanikal",
        &[
            "Instalasi Pipa Air Bersih",
            "Instalasi Pipa Air Kotor",
            "Instalasi Pipa Air Hujan",
            "Pompa Air",
            "Septic Tank",
            "Bak Kontrol",
            "Fire Hydrant System",
            "Sprinkler System",
            "HVAC Central",
            "Exhaust Fan",
        ],
    ),
    (
        "electrical",
        "Pekerjaan Elektrikal",
        &[
            "Panel Listrik Utama",
            "Panel Sub Distribusi",
            "Instalasi Kabel Power",
            "Instalasi Lampu LED",
            "Stop Kontak dan Saklar",
            "Grounding System",
            "Lightning Rod",
            "CCTV System",
            "Sound System",
            "Access Control",
            "Fire Alarm System",
            "Emergency Lighting",
        ],
    ),
    (
        "landscape",
        "Pekerjaan Lansekap",
        &[
            "Taman dan Tanaman Hias",
            "Sistem Irigasi Taman",
            "Paving Block",
            "Curbing Beton",
            "Gazebo",
            "Playground Equipment",
            "Lampu Taman",
        ],
    ),
    (
        "specialty",
        "Pekerjaan Khusus",
        &[
            "Lift Passenger",
            "Escalator",
            "Genset",
            "Transformer",
            "Server Room",
            "Kitchen Equipment",
            "Medical Equipment",
            "Laboratory Equipment",
        ],
    ),
];

const UNIT_PRICES: &[(&str, &str, i64)] = &[
    // Persiapan
    ("Mobilisasi dan Demobilisasi", "ls", 25_000_000),
    ("Pagar Pengaman Proyek", "m1", 185_000),
    ("Kantor dan Gudang Sementara", "m2", 850_000),
    ("Papan Nama Proyek", "unit", 2_500_000),
    ("Bongkar Bangunan Lama", "m2", 125_000),
    ("Pembersihan Lahan", "m2", 8_500),
    ("Direksi Kit", "ls", 15_000_000),
    ("Pengukuran dan Pematokan", "m2", 2_500),
    // Tanah
    ("Galian Tanah Pondasi", "m3", 65_000),
    ("Galian Tanah Saluran", "m3", 55_000),
    ("Timbunan Tanah Pilihan", "m3", 75_000),
    ("Pemadatan Tanah", "m3", 35_000),
    ("Urugan Pasir Bawah Pondasi", "m3", 385_000),
    ("Urugan Sirtu Jalan Kerja", "m3", 285_000),
    ("Dewatering/Pompa Air", "ls", 8_500_000),
    // Pondasi
    ("Pondasi Bore Pile D30cm", "m1", 485_000),
    ("Pondasi Bore Pile D40cm", "m1", 685_000),
    ("Pondasi Foot Plat", "m3", 2_850_000),
    ("Pile Cap", "m3", 2_650_000),
    ("Sloof Beton Bertulang", "m3", 2_750_000),
    ("Dinding Penahan Tanah", "m3", 2_950_000),
    ("Pondasi Batu Kali", "m3", 850_000),
    ("Waterproofing Pondasi", "m2", 125_000),
    // Struktur
    ("Kolom Beton Bertulang", "m3", 3_250_000),
    ("Balok Beton Bertulang", "m3", 3_150_000),
    ("Pelat Lantai Beton", "m3", 2_950_000),
    ("Tangga Beton Bertulang", "m3", 3_450_000),
    ("Cor Lantai Kerja", "m3", 1_250_000),
    ("Dinding Geser/Shear Wall", "m3", 3_350_000),
    ("Struktur Baja", "kg", 18_500),
    ("Bekisting dan Perancah", "m2", 185_000),
    // Arsitektur
    ("Dinding Bata Merah", "m2", 185_000),
    ("Dinding Hebel/Bata Ringan", "m2", 225_000),
    ("Plesteran dan Acian", "m2", 45_000),
    ("Pengecatan Dinding", "m2", 28_000),
    ("Keramik Lantai 60x60", "m2", 285_000),
    ("Keramik Dinding 30x30", "m2", 185_000),
    ("Pintu dan Jendela", "m2", 1_850_000),
    ("Plafon Gypsum", "m2", 185_000),
    ("Atap Genteng Metal", "m2", 285_000),
    ("Partisi Toilet", "m2", 485_000),
    // Mekanikal
    ("Instalasi Pipa Air Bersih", "titik", 285_000),
    ("Instalasi Pipa Air Kotor", "titik", 385_000),
    ("Instalasi Pipa Air Hujan", "m1", 125_000),
    ("Pompa Air", "unit", 8_500_000),
    ("Septic Tank", "unit", 12_500_000),
    ("Bak Kontrol", "unit", 1_850_000),
    ("Fire Hydrant System", "titik", 8_500_000),
    ("Sprinkler System", "titik", 485_000),
    ("HVAC Central", "pk", 25_000_000),
    ("Exhaust Fan", "unit", 1_250_000),
    // Elektrikal
    ("Panel Listrik Utama", "unit", 45_000_000),
    ("Panel Sub Distribusi", "unit", 18_500_000),
    ("Instalasi Kabel Power", "titik", 385_000),
    ("Instalasi Lampu LED", "titik", 485_000),
    ("Stop Kontak dan Saklar", "titik", 185_000),
    ("Grounding System", "titik", 1_250_000),
    ("Lightning Rod", "unit", 8_500_000),
    ("CCTV System", "titik", 4_850_000),
    ("Sound System", "zone", 8_500_000),
    ("Access Control", "titik", 6_850_000),
    ("Fire Alarm System", "titik", 2_850_000),
    ("Emergency Lighting", "titik", 685_000),
    // Lansekap
    ("Taman dan Tanaman Hias", "m2", 185_000),
    ("Sistem Irigasi Taman", "m2", 85_000),
    ("Paving Block", "m2", 185_000),
    ("Curbing Beton", "m1", 125_000),
    ("Gazebo", "unit", 25_000_000),
    ("Playground Equipment", "set", 85_000_000),
    ("Lampu Taman", "unit", 1_850_000),
    // Khusus
    ("Lift Passenger", "unit", 485_000_000),
    ("Escalator", "unit", 785_000_000),
    ("Genset", "kva", 18_500_000),
    ("Transformer", "kva", 28_500_000),
    ("Server Room", "ls", 185_000_000),
    ("Kitchen Equipment", "ls", 125_000_000),
    ("Medical Equipment", "ls", 285_000_000),
    ("Laboratory Equipment", "ls", 185_000_000),
    // Special items
    ("Crane Rail System", "m1", 2_850_000),
    ("Industrial Flooring Heavy Duty", "m2", 485_000),
    ("Loading Dock", "unit", 85_000_000),
    ("Overhead Crane", "unit", 485_000_000),
    ("Fire Protection Foam System", "ls", 125_000_000),
    ("Escalator 2 Lantai", "unit", 785_000_000),
    ("Lift Passenger 8 Orang", "unit", 485_000_000),
    ("Fire Alarm Addressable", "ls", 85_000_000),
    ("CCTV IP Camera 4MP", "unit", 8_500_000),
    ("Sound System BGM", "ls", 45_000_000),
    ("Carport", "m2", 1_850_000),
    ("Pagar Rumah", "m1", 485_000),
    ("Taman Depan", "m2", 185_000),
    ("Water Heater Solar", "unit", 18_500_000),
    ("Expansion Joint", "m1", 1_850_000),
    ("Bridge Bearing", "unit", 28_500_000),
    ("Guardrail", "m1", 485_000),
    ("Street Lighting", "unit", 8_500_000),
    ("Traffic Light System", "set", 185_000_000),
    ("Medical Gas System", "ls", 185_000_000),
    ("Operating Room Equipment", "ls", 485_000_000),
    ("Clean Room HVAC", "ls", 285_000_000),
    ("X-Ray Room Shielding", "m2", 2_850_000),
    ("Nurse Call System", "ls", 85_000_000),
];

/// Lump-sum items, always one per project.
const FIXED_ITEMS: &[&str] = &[
    "Mobilisasi dan Demobilisasi",
    "Direksi Kit",
    "Dewatering/Pompa Air",
    "Panel Listrik Utama",
    "Server Room",
    "Kitchen Equipment",
    "Medical Equipment",
    "Laboratory Equipment",
];

/// Items required at least once regardless of budget size.
const AT_LEAST_ONE_ITEMS: &[(&str, i64)] = &[
    ("Papan Nama Proyek", 2),
    ("Pompa Air", 2),
    ("Septic Tank", 1),
    ("Lightning Rod", 2),
    ("Gazebo", 1),
    ("Playground Equipment", 1),
    ("Lift Passenger", 1),
    ("Escalator", 1),
];

/// Quantity per budget unit for budget-scaled items.
const SCALED_ITEMS: &[(&str, i64)] = &[
    ("Pagar Pengaman Proyek", 200),
    ("Kantor dan Gudang Sementara", 50),
    ("Bongkar Bangunan Lama", 100),
    ("Pembersihan Lahan", 500),
    ("Pengukuran dan Pematokan", 500),
    ("Galian Tanah Pondasi", 150),
    ("Galian Tanah Saluran", 75),
    ("Timbunan Tanah Pilihan", 200),
    ("Pemadatan Tanah", 300),
    ("Urugan Pasir Bawah Pondasi", 50),
    ("Urugan Sirtu Jalan Kerja", 100),
    ("Pondasi Bore Pile D30cm", 100),
    ("Pondasi Bore Pile D40cm", 50),
    ("Pondasi Foot Plat", 25),
    ("Pile Cap", 20),
    ("Sloof Beton Bertulang", 30),
    ("Dinding Penahan Tanah", 15),
    ("Pondasi Batu Kali", 40),
    ("Waterproofing Pondasi", 200),
    ("Kolom Beton Bertulang", 50),
    ("Balok Beton Bertulang", 60),
    ("Pelat Lantai Beton", 150),
    ("Tangga Beton Bertulang", 8),
    ("Cor Lantai Kerja", 100),
    ("Dinding Geser/Shear Wall", 25),
    ("Struktur Baja", 5000),
    ("Bekisting dan Perancah", 500),
    ("Dinding Bata Merah", 800),
    ("Dinding Hebel/Bata Ringan", 400),
    ("Plesteran dan Acian", 1200),
    ("Pengecatan Dinding", 1200),
    ("Keramik Lantai 60x60", 500),
    ("Keramik Dinding 30x30", 200),
    ("Pintu dan Jendela", 100),
    ("Plafon Gypsum", 500),
    ("Atap Genteng Metal", 600),
    ("Partisi Toilet", 50),
    ("Instalasi Pipa Air Bersih", 30),
    ("Instalasi Pipa Air Kotor", 25),
    ("Instalasi Pipa Air Hujan", 100),
    ("Bak Kontrol", 5),
    ("Fire Hydrant System", 4),
    ("Sprinkler System", 20),
    ("HVAC Central", 10),
    ("Exhaust Fan", 8),
    ("Panel Sub Distribusi", 3),
    ("Instalasi Kabel Power", 50),
    ("Instalasi Lampu LED", 80),
    ("Stop Kontak dan Saklar", 100),
    ("Grounding System", 10),
    ("CCTV System", 12),
    ("Sound System", 4),
    ("Access Control", 6),
    ("Fire Alarm System", 20),
    ("Emergency Lighting", 15),
    ("Taman dan Tanaman Hias", 200),
    ("Sistem Irigasi Taman", 200),
    ("Paving Block", 300),
    ("Curbing Beton", 150),
    ("Lampu Taman", 10),
    ("Genset", 250),
    ("Transformer", 500),
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(key, display_name, items)| Category {
            key: key.to_string(),
            display_name: display_name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub(super) fn unit_prices() -> BTreeMap<String, UnitPrice> {
    UNIT_PRICES
        .iter()
        .map(|(item, unit, price)| {
            (
                item.to_string(),
                UnitPrice {
                    unit: unit.to_string(),
                    price: Decimal::from(*price),
                },
            )
        })
        .collect()
}

pub(super) fn reference_quantities() -> BTreeMap<String, QuantityRule> {
    let fixed = FIXED_ITEMS
        .iter()
        .map(|item| (item.to_string(), QuantityRule::Fixed { quantity: 1 }));
    let at_least_one = AT_LEAST_ONE_ITEMS.iter().map(|(item, base)| {
        (
            item.to_string(),
            QuantityRule::AtLeastOne {
                base: Decimal::from(*base),
            },
        )
    });
    let scaled = SCALED_ITEMS.iter().map(|(item, base)| {
        (
            item.to_string(),
            QuantityRule::Scaled {
                base: Decimal::from(*base),
            },
        )
    });
    fixed.chain(at_least_one).chain(scaled).collect()
}

fn profile(
    project_type: ProjectType,
    shares: &[(&str, Decimal)],
    special_items: &[&str],
) -> AllocationProfile {
    AllocationProfile {
        project_type,
        categories: shares.iter().map(|(key, _)| key.to_string()).collect(),
        multipliers: shares
            .iter()
            .map(|(key, share)| (key.to_string(), *share))
            .collect(),
        special_items: special_items.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn profiles() -> Vec<AllocationProfile> {
    vec![
        profile(
            ProjectType::Industrial,
            &[
                ("preparation", dec!(0.05)),
                ("earthwork", dec!(0.08)),
                ("foundation", dec!(0.15)),
                ("structure", dec!(0.35)),
                ("architecture", dec!(0.20)),
                ("mechanical", dec!(0.10)),
                ("electrical", dec!(0.07)),
            ],
            &[
                "Crane Rail System",
                "Industrial Flooring Heavy Duty",
                "Loading Dock",
                "Overhead Crane",
                "Fire Protection Foam System",
            ],
        ),
        profile(
            ProjectType::Commercial,
            &[
                ("preparation", dec!(0.04)),
                ("earthwork", dec!(0.06)),
                ("foundation", dec!(0.12)),
                ("structure", dec!(0.30)),
                ("architecture", dec!(0.25)),
                ("mechanical", dec!(0.08)),
                ("electrical", dec!(0.10)),
                ("specialty", dec!(0.05)),
            ],
            &[
                "Escalator 2 Lantai",
                "Lift Passenger 8 Orang",
                "Fire Alarm Addressable",
                "CCTV IP Camera 4MP",
                "Sound System BGM",
            ],
        ),
        profile(
            ProjectType::Residential,
            &[
                ("preparation", dec!(0.03)),
                ("earthwork", dec!(0.05)),
                ("foundation", dec!(0.10)),
                ("structure", dec!(0.25)),
                ("architecture", dec!(0.35)),
                ("mechanical", dec!(0.08)),
                ("electrical", dec!(0.08)),
                ("landscape", dec!(0.06)),
            ],
            &["Carport", "Pagar Rumah", "Taman Depan", "Water Heater Solar"],
        ),
        profile(
            ProjectType::Infrastructure,
            &[
                ("preparation", dec!(0.06)),
                ("earthwork", dec!(0.20)),
                ("foundation", dec!(0.25)),
                ("structure", dec!(0.30)),
                ("architecture", dec!(0.10)),
                ("mechanical", dec!(0.05)),
                ("electrical", dec!(0.04)),
            ],
            &[
                "Expansion Joint",
                "Bridge Bearing",
                "Guardrail",
                "Street Lighting",
                "Traffic Light System",
            ],
        ),
        profile(
            ProjectType::Healthcare,
            &[
                ("preparation", dec!(0.04)),
                ("earthwork", dec!(0.05)),
                ("foundation", dec!(0.10)),
                ("structure", dec!(0.25)),
                ("architecture", dec!(0.25)),
                ("mechanical", dec!(0.12)),
                ("electrical", dec!(0.12)),
                ("specialty", dec!(0.07)),
            ],
            &[
                "Medical Gas System",
                "Operating Room Equipment",
                "Clean Room HVAC",
                "X-Ray Room Shielding",
                "Nurse Call System",
            ],
        ),
    ]
}
